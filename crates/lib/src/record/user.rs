//! User account records.
//!
//! One file holds every account; the role discriminator selects which
//! profile fields follow the common prefix. Profile extras are optional
//! on disk and default sensibly when an older line lacks them.

use serde::Serialize;

use super::{
    Record, RecordError, ensure_min_fields, field, flag, parse_flag, parse_i64_lossy,
    parse_u32_lossy,
};

/// Salary assigned to staff hired without an explicit figure.
pub const DEFAULT_STAFF_SALARY: i64 = 5_000_000;

const DEFAULT_STAFF_POSITION: &str = "Receptionist";
const DEFAULT_STAFF_SHIFT: &str = "Morning";

/// What an account is allowed to do. Doubles as the discriminator in the
/// users file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Staff,
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Staff => "STAFF",
            Role::Owner => "OWNER",
        }
    }

    /// Parse a role discriminator.
    ///
    /// # Errors
    /// Returns an unknown-discriminator error for unrecognized text; a
    /// user line with a bad role is dropped whole.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        match text {
            "CUSTOMER" => Ok(Role::Customer),
            "STAFF" => Ok(Role::Staff),
            "OWNER" => Ok(Role::Owner),
            other => Err(RecordError::UnknownDiscriminator {
                what: "user role",
                value: other.to_string(),
            }),
        }
    }
}

/// Role-specific detail carried alongside the common account fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Customer {
        address: String,
        bookings: u32,
        total_spent: i64,
    },
    Staff {
        position: String,
        shift: String,
        salary: i64,
        handled: u32,
    },
    Owner,
}

/// A single account, keyed by its id (`P` for customers, `PG` for staff,
/// `PM` for the owner).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
    phone: String,
    #[serde(skip_serializing)]
    secret: String,
    active: bool,
    profile: Profile,
}

impl User {
    pub fn new_customer(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        secret: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            secret: secret.into(),
            active: true,
            profile: Profile::Customer {
                address: address.into(),
                bookings: 0,
                total_spent: 0,
            },
        }
    }

    pub fn new_staff(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        secret: impl Into<String>,
        position: impl Into<String>,
        shift: impl Into<String>,
        salary: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            secret: secret.into(),
            active: true,
            profile: Profile::Staff {
                position: position.into(),
                shift: shift.into(),
                salary,
                handled: 0,
            },
        }
    }

    pub fn new_owner(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            secret: secret.into(),
            active: true,
            profile: Profile::Owner,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn role(&self) -> Role {
        match self.profile {
            Profile::Customer { .. } => Role::Customer,
            Profile::Staff { .. } => Role::Staff,
            Profile::Owner => Role::Owner,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Compare a sign-in attempt against the stored secret. Whether the
    /// account may sign in at all is the directory's call.
    pub fn matches_secret(&self, attempt: &str) -> bool {
        self.secret == attempt
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Fold a settled booking into a customer's running stats. Returns
    /// false when the account is not a customer.
    pub fn record_completed_booking(&mut self, amount: i64) -> bool {
        match &mut self.profile {
            Profile::Customer {
                bookings,
                total_spent,
                ..
            } => {
                *bookings += 1;
                *total_spent += amount;
                true
            }
            _ => false,
        }
    }

    /// Bump a staff member's handled-booking count. Returns false when
    /// the account is not staff.
    pub fn record_handled_booking(&mut self) -> bool {
        match &mut self.profile {
            Profile::Staff { handled, .. } => {
                *handled += 1;
                true
            }
            _ => false,
        }
    }
}

impl Record for User {
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        ensure_min_fields("user", fields, 7)?;
        let role = Role::parse(fields[0])?;
        let profile = match role {
            Role::Customer => Profile::Customer {
                address: field(fields, 7).to_string(),
                bookings: parse_u32_lossy(field(fields, 8), 0),
                total_spent: parse_i64_lossy(field(fields, 9), 0),
            },
            Role::Staff => {
                let position = field(fields, 7);
                let shift = field(fields, 8);
                Profile::Staff {
                    position: if position.is_empty() {
                        DEFAULT_STAFF_POSITION.to_string()
                    } else {
                        position.to_string()
                    },
                    shift: if shift.is_empty() {
                        DEFAULT_STAFF_SHIFT.to_string()
                    } else {
                        shift.to_string()
                    },
                    salary: parse_i64_lossy(field(fields, 9), DEFAULT_STAFF_SALARY),
                    handled: parse_u32_lossy(field(fields, 10), 0),
                }
            }
            Role::Owner => Profile::Owner,
        };
        Ok(Self {
            id: fields[1].to_string(),
            name: fields[2].to_string(),
            email: fields[3].to_string(),
            phone: fields[4].to_string(),
            secret: fields[5].to_string(),
            active: parse_flag(fields[6]),
            profile,
        })
    }

    fn to_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.role().as_str().to_string(),
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.secret.clone(),
            flag(self.active),
        ];
        match &self.profile {
            Profile::Customer {
                address,
                bookings,
                total_spent,
            } => {
                fields.push(address.clone());
                fields.push(bookings.to_string());
                fields.push(total_spent.to_string());
            }
            Profile::Staff {
                position,
                shift,
                salary,
                handled,
            } => {
                fields.push(position.clone());
                fields.push(shift.clone());
                fields.push(salary.to_string());
                fields.push(handled.to_string());
            }
            Profile::Owner => {}
        }
        fields
    }

    fn key(&self) -> &str {
        &self.id
    }
}
