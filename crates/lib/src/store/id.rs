//! Prefixed, zero-padded id sequences.

/// Allocator for ids shaped like `P007` or `T013`: a fixed prefix followed
/// by a zero-padded number.
///
/// A sequence recovers its position from data already on disk: every key
/// read during a load is [`observe`](IdSequence::observe)d, so the next
/// allocation always lands past the highest existing number.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: String,
    width: usize,
    next: u64,
}

impl IdSequence {
    /// A sequence for `prefix`, starting at 1 and padding to three digits.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            width: 3,
            next: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fold an existing id into the sequence so future allocations stay
    /// ahead of it.
    ///
    /// Only ids that are exactly this prefix followed by digits count:
    /// the `P` sequence ignores `PG001`, and both ignore `P12X`.
    pub fn observe(&mut self, id: &str) {
        let Some(digits) = id.strip_prefix(self.prefix.as_str()) else {
            return;
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return;
        }
        let Ok(number) = digits.parse::<u64>() else {
            return;
        };
        if number >= self.next {
            self.next = number + 1;
        }
    }

    /// Hand out the next id and advance the sequence.
    pub fn allocate(&mut self) -> String {
        let id = self.peek();
        self.next += 1;
        id
    }

    /// The id `allocate` would hand out, without consuming it.
    pub fn peek(&self) -> String {
        format!("{}{:0width$}", self.prefix, self.next, width = self.width)
    }

    /// Forget everything observed and start over at 1.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_zero_padded_ids_in_order() {
        let mut seq = IdSequence::new("P");

        assert_eq!(seq.allocate(), "P001");
        assert_eq!(seq.allocate(), "P002");
    }

    #[test]
    fn observe_moves_the_sequence_past_existing_ids() {
        let mut seq = IdSequence::new("P");
        seq.observe("P001");
        seq.observe("P005");
        seq.observe("P002");

        assert_eq!(seq.allocate(), "P006");
    }

    #[test]
    fn observe_ignores_lower_ids() {
        let mut seq = IdSequence::new("T");
        seq.observe("T009");
        seq.observe("T003");

        assert_eq!(seq.allocate(), "T010");
    }

    #[test]
    fn prefix_match_is_exact_both_ways() {
        let mut customers = IdSequence::new("P");
        let mut staff = IdSequence::new("PG");

        customers.observe("PG007");
        staff.observe("P007");

        assert_eq!(customers.allocate(), "P001");
        assert_eq!(staff.allocate(), "PG001");
    }

    #[test]
    fn observe_ignores_non_numeric_suffixes() {
        let mut seq = IdSequence::new("P");
        seq.observe("P12X");
        seq.observe("P");
        seq.observe("PM001");

        assert_eq!(seq.allocate(), "P001");
    }

    #[test]
    fn padding_gives_way_past_three_digits() {
        let mut seq = IdSequence::new("T");
        seq.observe("T999");

        assert_eq!(seq.allocate(), "T1000");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = IdSequence::new("L");

        assert_eq!(seq.peek(), "L001");
        assert_eq!(seq.peek(), "L001");
        assert_eq!(seq.allocate(), "L001");
    }

    #[test]
    fn reset_starts_over() {
        let mut seq = IdSequence::new("P");
        seq.observe("P041");
        seq.reset();

        assert_eq!(seq.allocate(), "P001");
    }
}
