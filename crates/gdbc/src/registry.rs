//! Driver registry
//!
//! Binds a driver alias, as written in gdbc URIs, to the real driver identity
//! known by the sql client library and to the adapter producing that driver's
//! connection strings. Bindings are permanent.
//!
//! Registration happens while the process is wired together, so a broken
//! registration (empty names, reused alias, reused driver) panics instead of
//! returning an error. Lookups never panic.

use crate::adapter::DataSourceNameAdapter;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info};

static REGISTRY: Lazy<Arc<DriverRegistry>> = Lazy::new(|| Arc::new(DriverRegistry::new()));

/// The process-wide registry used by [`register`](crate::register) and
/// [`DataSource::get_connection`](crate::DataSource::get_connection).
pub fn global() -> Arc<DriverRegistry> {
    Arc::clone(&REGISTRY)
}

/// A registered driver: its real identity and its naming adapter
#[derive(Clone)]
pub struct RegistryEntry {
    driver_name: String,
    adapter: Arc<dyn DataSourceNameAdapter>,
}

impl RegistryEntry {
    /// Real driver identity, as the sql client library knows it
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn adapter(&self) -> &Arc<dyn DataSourceNameAdapter> {
        &self.adapter
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("driver_name", &self.driver_name)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Bindings {
    entries: HashMap<String, RegistryEntry>,
    // driver name -> alias that bound it
    drivers: HashMap<String, String>,
}

/// Table of alias -> (driver, adapter) bindings, safe to share between threads
#[derive(Default)]
pub struct DriverRegistry {
    bindings: RwLock<Bindings>,
}

impl DriverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // Panics release the lock before unwinding, so poisoning only comes from
    // foreign code; the map is never left half-written either way.
    fn read(&self) -> RwLockReadGuard<'_, Bindings> {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bindings> {
        self.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind `alias` to `driver_name` and `adapter`.
    ///
    /// # Panics
    ///
    /// * `alias` or `driver_name` is empty
    /// * `alias` is already registered
    /// * `driver_name` is already bound to another alias
    pub fn register<A>(&self, alias: &str, driver_name: &str, adapter: A)
    where
        A: DataSourceNameAdapter + 'static,
    {
        self.register_shared(alias, driver_name, Arc::new(adapter));
    }

    /// Same as [`register`](Self::register), for an adapter that is already shared.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`register`](Self::register).
    pub fn register_shared(
        &self,
        alias: &str,
        driver_name: &str,
        adapter: Arc<dyn DataSourceNameAdapter>,
    ) {
        if alias.is_empty() || driver_name.is_empty() {
            fail("gdbc: driver and driver alias name cannot be empty".to_string());
        }

        let violation = {
            let mut bindings = self.write();
            if bindings.entries.contains_key(alias) {
                Some(format!(
                    "gdbc: already registered an adapter with the same alias name : {alias}"
                ))
            } else if let Some(bound_alias) = bindings.drivers.get(driver_name) {
                Some(format!(
                    "gdbc: driver {driver_name} is already registered under alias : {bound_alias}"
                ))
            } else {
                bindings
                    .drivers
                    .insert(driver_name.to_string(), alias.to_string());
                bindings.entries.insert(
                    alias.to_string(),
                    RegistryEntry {
                        driver_name: driver_name.to_string(),
                        adapter,
                    },
                );
                None
            }
        };

        if let Some(message) = violation {
            fail(message);
        }
        info!("Registered driver {} under alias {}", driver_name, alias);
    }

    /// Look up the binding for `alias`.
    pub fn lookup(&self, alias: &str) -> Option<RegistryEntry> {
        let entry = self.read().entries.get(alias).cloned();
        if entry.is_none() {
            debug!("No driver registered under alias {}", alias);
        }
        entry
    }

    /// Real driver identity bound to `alias`
    pub fn driver_name(&self, alias: &str) -> Option<String> {
        self.read()
            .entries
            .get(alias)
            .map(|entry| entry.driver_name.clone())
    }

    /// Naming adapter bound to `alias`
    pub fn adapter(&self, alias: &str) -> Option<Arc<dyn DataSourceNameAdapter>> {
        self.read()
            .entries
            .get(alias)
            .map(|entry| Arc::clone(&entry.adapter))
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.read().entries.contains_key(alias)
    }

    /// Registered aliases, sorted
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.read().entries.keys().cloned().collect();
        aliases.sort();
        aliases
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}

fn fail(message: String) -> ! {
    error!("{}", message);
    panic!("{}", message);
}
