//! The facility service menu.

use std::path::PathBuf;

use crate::Result;
use crate::record::{PriceUnit, Service, ServiceCategory};
use crate::store::{EntityStore, IdSequence, LoadReport};

/// The menu of bookable facility services, keyed by `L`-prefixed ids.
pub struct ServiceCatalog {
    store: EntityStore<Service>,
}

impl ServiceCatalog {
    pub(crate) fn open(path: PathBuf) -> Self {
        Self {
            store: EntityStore::open("services", path, vec![IdSequence::new("L")]),
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

    /// Look up a service by id.
    ///
    /// # Errors
    /// Returns a not-found error for unknown ids.
    pub fn service(&self, id: &str) -> Result<&Service> {
        Ok(self.store.get(id)?)
    }

    /// Put a new service on the menu under a fresh `L` id.
    ///
    /// # Returns
    /// The id the service was filed under.
    pub fn add_service(
        &mut self,
        name: impl Into<String>,
        category: ServiceCategory,
        rate: i64,
        unit: PriceUnit,
        min_order: u32,
        description: impl Into<String>,
    ) -> Result<String> {
        let id = self.store.next_id("L")?;
        let service = Service::new(id.clone(), name, category, rate, unit, min_order, description);
        self.store.add(service)?;
        Ok(id)
    }

    pub fn set_rate(&mut self, id: &str, rate: i64) -> Result<()> {
        self.store.update(id, |service| service.set_rate(rate))
    }

    /// Switch a service on or off without taking it off the menu.
    pub fn set_available(&mut self, id: &str, available: bool) -> Result<()> {
        self.store
            .update(id, |service| service.set_available(available))
    }

    /// Every service in `category`, in menu order.
    pub fn services_in_category(&self, category: ServiceCategory) -> Vec<&Service> {
        self.store
            .iter()
            .filter(|service| service.category() == category)
            .collect()
    }

    /// Services currently switched on, in menu order.
    pub fn available_services(&self) -> Vec<&Service> {
        self.store
            .iter()
            .filter(|service| service.is_available())
            .collect()
    }

    /// Services with ids in `lo..=hi`, ascending by id.
    pub fn ids_between(&self, lo: &str, hi: &str) -> Vec<&Service> {
        self.store.range(lo, hi)
    }

    /// Iterate the whole menu in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> + '_ {
        self.store.iter()
    }
}
