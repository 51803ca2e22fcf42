//! # Instance Facade
//!
//! [`Preferences`] is the per-instance view: it binds a [`PreferableClass`]
//! to the store that holds that instance's preferences blob, and exposes
//! name-based access plus the bulk queries built on top of it.
//!
//! ## Name-based Access
//!
//! `get`/`set`/`clear` dispatch to the accessor the class registered for the
//! name. Unknown names are [`PreferableError::UnknownPreference`]. Accessors
//! obtained from the class directly never error on lookup.
//!
//! ## Bulk Queries
//!
//! - `all_preferences`: every declared name, in declaration order, mapped to
//!   its current value.
//! - `preferences_in_group`: same, restricted by a [`GroupFilter`].
//! - `each_in_group`: visits `(name, metadata, value)` in declaration order.
//!
//! All bulk results are computed eagerly from one read of the store.
//!
//! ## Seeding Defaults
//!
//! Queryable preferences must exist in the stored blob, not just as virtual
//! defaults, so external queries over persisted data can see them. The host
//! calls [`Preferences::before_save`] right before persisting.
//!
//! ## Generic Over AttributeStore
//!
//! `Preferences<'c, S: AttributeStore>` works with any store:
//! - `Preferences<MemoryStore>` for in-memory blobs
//! - `Preferences<JsonFileStore>` for a blob persisted on disk
//! - `Preferences<&mut S>` to borrow a store the host keeps owning

use crate::accessor::WriteOutcome;
use crate::class::PreferableClass;
use crate::error::Result;
use crate::filter::GroupFilter;
use crate::meta::PreferenceMetadata;
use crate::store::AttributeStore;
use crate::value::PrefValue;
use indexmap::IndexMap;

/// Preference name to current value (default or stored), in declaration order.
pub type PrefValues = IndexMap<String, Option<PrefValue>>;

pub struct Preferences<'c, S: AttributeStore> {
    class: &'c PreferableClass,
    store: S,
}

impl<'c, S: AttributeStore> Preferences<'c, S> {
    pub fn new(class: &'c PreferableClass, store: S) -> Self {
        Self { class, store }
    }

    pub fn class(&self) -> &'c PreferableClass {
        self.class
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Result<Option<PrefValue>> {
        self.class.require(name)?.read(&self.store)
    }

    /// Coerce and store `value` under `name`.
    ///
    /// Values outside a preference's options come back as
    /// [`WriteOutcome::Rejected`], not as an error.
    pub fn set(&mut self, name: &str, value: impl Into<PrefValue>) -> Result<WriteOutcome> {
        self.class.require(name)?.write(&mut self.store, value)
    }

    /// Drop the stored value of `name` so it reads as its default again.
    pub fn clear(&mut self, name: &str) -> Result<bool> {
        self.class.require(name)?.clear(&mut self.store)
    }

    pub fn all_preferences(&self) -> Result<PrefValues> {
        self.preferences_in_group(&GroupFilter::All)
    }

    pub fn preferences_in_group(&self, filter: &GroupFilter) -> Result<PrefValues> {
        let stored = self.store.read_store()?;
        Ok(self
            .class
            .accessors()
            .filter(|acc| filter.matches(acc.meta()))
            .map(|acc| (acc.name().to_string(), acc.value_in(stored.as_ref())))
            .collect())
    }

    /// Visit every preference matched by `filter` in declaration order.
    pub fn each_in_group<F>(&self, filter: &GroupFilter, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, &PreferenceMetadata, Option<&PrefValue>),
    {
        let values = self.preferences_in_group(filter)?;
        for acc in self.class.accessors() {
            if let Some(value) = values.get(acc.name()) {
                visit(acc.name(), acc.meta(), value.as_ref());
            }
        }
        Ok(())
    }

    /// Write the default of every queryable preference that has no stored
    /// value yet. Returns how many entries were materialized.
    pub fn seed_defaults(&mut self) -> Result<usize> {
        let mut prefs = self.store.read_store()?.unwrap_or_default();
        let mut seeded = 0;
        for acc in self.class.accessors() {
            let meta = acc.meta();
            if !meta.queryable() || prefs.contains_key(meta.name()) {
                continue;
            }
            if let Some(default) = meta.default() {
                tracing::trace!(pref = meta.name(), "Seeding default into store");
                prefs.insert(meta.name().to_string(), default.clone());
                seeded += 1;
            }
        }
        if seeded > 0 {
            self.store.write_store(prefs)?;
        }
        Ok(seeded)
    }

    /// Hook for the host to call right before it persists the instance.
    pub fn before_save(&mut self) -> Result<()> {
        self.seed_defaults()?;
        Ok(())
    }
}
