//! Output formatting for the command implementations.

use clap::ValueEnum;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    Human,
    /// One JSON document on stdout
    Json,
}

/// Print rows under a header, each column padded to its widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate().take(widths.len()) {
            widths[col] = widths[col].max(cell.len());
        }
    }

    let mut line = String::new();
    for (col, header) in headers.iter().enumerate() {
        if col > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{header:<width$}", width = widths[col]));
    }
    println!("{}", line.trim_end());

    for row in rows {
        line.clear();
        for (col, cell) in row.iter().enumerate().take(widths.len()) {
            if col > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{cell:<width$}", width = widths[col]));
        }
        println!("{}", line.trim_end());
    }
}

/// Render a money amount with thousands separators, e.g. `1,500,000`.
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0), "0");
        assert_eq!(money(950), "950");
        assert_eq!(money(1_500_000), "1,500,000");
        assert_eq!(money(-75_000), "-75,000");
    }
}
