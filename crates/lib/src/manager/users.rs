//! Customer, staff, and owner accounts.

use std::path::PathBuf;

use tracing::info;

use super::ManagerError;
use crate::Result;
use crate::record::{DEFAULT_STAFF_SALARY, Role, User};
use crate::store::{EntityStore, IdSequence, LoadReport};

/// The one account allowed to exist with the owner role.
const OWNER_ID: &str = "PM001";

/// Every account in one store: customers under `P` ids, staff under
/// `PG`, and the single owner under a fixed id.
pub struct UserDirectory {
    store: EntityStore<User>,
}

impl UserDirectory {
    pub(crate) fn open(path: PathBuf) -> Self {
        Self {
            store: EntityStore::open(
                "users",
                path,
                vec![IdSequence::new("P"), IdSequence::new("PG")],
            ),
        }
    }

    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.load()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up an account by id.
    ///
    /// # Errors
    /// Returns a not-found error for unknown ids.
    pub fn user(&self, id: &str) -> Result<&User> {
        Ok(self.store.get(id)?)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Open a customer account under a fresh `P` id.
    ///
    /// # Returns
    /// The id the account was filed under.
    pub fn register_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        secret: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<String> {
        let id = self.store.next_id("P")?;
        let user = User::new_customer(id.clone(), name, email, phone, secret, address);
        self.store.add(user)?;
        info!(user = %id, "Customer registered");
        Ok(id)
    }

    /// Hire a staff member under a fresh `PG` id. Without an explicit
    /// salary the standard figure applies.
    pub fn register_staff(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        secret: impl Into<String>,
        position: impl Into<String>,
        shift: impl Into<String>,
        salary: Option<i64>,
    ) -> Result<String> {
        let id = self.store.next_id("PG")?;
        let user = User::new_staff(
            id.clone(),
            name,
            email,
            phone,
            secret,
            position,
            shift,
            salary.unwrap_or(DEFAULT_STAFF_SALARY),
        );
        self.store.add(user)?;
        info!(user = %id, "Staff member registered");
        Ok(id)
    }

    /// Create the owner account if no account holds its fixed id yet.
    ///
    /// # Returns
    /// True when the account was created on this call.
    pub fn ensure_owner_account(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<bool> {
        if self.store.contains(OWNER_ID) {
            return Ok(false);
        }
        self.store
            .add(User::new_owner(OWNER_ID, name, email, secret))?;
        info!(user = OWNER_ID, "Owner account created");
        Ok(true)
    }

    /// Sign in with an account id or email address.
    ///
    /// # Errors
    /// Returns [`ManagerError::AuthenticationFailed`] for unknown logins,
    /// wrong secrets, and deactivated accounts alike.
    pub fn authenticate(&self, login: &str, secret: &str) -> Result<&User> {
        let user = self
            .store
            .find(login)
            .or_else(|| self.store.find_where(|user| user.email() == login));
        match user {
            Some(user) if user.is_active() && user.matches_secret(secret) => Ok(user),
            _ => Err(ManagerError::AuthenticationFailed.into()),
        }
    }

    /// Activate or deactivate an account. Deactivated accounts keep their
    /// history but can no longer sign in.
    pub fn set_active(&mut self, id: &str, active: bool) -> Result<()> {
        self.store.update(id, |user| user.set_active(active))
    }

    /// Fold a settled booking into a customer's stats.
    ///
    /// # Errors
    /// Returns [`ManagerError::NotACustomer`] for staff and owner ids.
    pub fn record_spending(&mut self, id: &str, amount: i64) -> Result<()> {
        let counted = self
            .store
            .update(id, |user| user.record_completed_booking(amount))?;
        if !counted {
            return Err(ManagerError::NotACustomer { id: id.to_string() }.into());
        }
        Ok(())
    }

    /// Bump a staff member's handled-booking counter.
    ///
    /// # Errors
    /// Returns [`ManagerError::NotStaff`] for customer and owner ids.
    pub fn record_handled(&mut self, id: &str) -> Result<()> {
        let counted = self.store.update(id, |user| user.record_handled_booking())?;
        if !counted {
            return Err(ManagerError::NotStaff { id: id.to_string() }.into());
        }
        Ok(())
    }

    /// Every account with `role`, in file order.
    pub fn with_role(&self, role: Role) -> Vec<&User> {
        self.store.iter().filter(|user| user.role() == role).collect()
    }

    /// Iterate every account in file order.
    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.store.iter()
    }
}
