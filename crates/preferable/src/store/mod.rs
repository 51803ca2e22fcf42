//! # Attribute Stores
//!
//! Preferences are not stored as individual fields. Each instance owns a
//! single key/value blob, the [`PrefMap`], and the core only ever needs two
//! operations on it:
//!
//! - **read**: return the current blob, or `None` if nothing was ever stored
//! - **write**: replace the blob wholesale
//!
//! How the blob is persisted is up to the host. [`AttributeStore`] is the seam.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: Holds the blob in memory. Used by tests and by
//!   hosts that serialize the blob themselves.
//! - [`json::JsonFileStore`]: Persists the blob as a JSON file, written atomically.

use crate::error::Result;
use crate::value::PrefValue;
use std::collections::BTreeMap;

pub mod json;
pub mod memory;

/// The preferences blob: preference name to stored value.
pub type PrefMap = BTreeMap<String, PrefValue>;

/// Abstract interface for the per-instance preferences blob.
pub trait AttributeStore {
    /// Read the current blob. `Ok(None)` means nothing has been stored yet.
    fn read_store(&self) -> Result<Option<PrefMap>>;

    /// Replace the blob.
    fn write_store(&mut self, prefs: PrefMap) -> Result<()>;
}

impl<S: AttributeStore + ?Sized> AttributeStore for &mut S {
    fn read_store(&self) -> Result<Option<PrefMap>> {
        (**self).read_store()
    }

    fn write_store(&mut self, prefs: PrefMap) -> Result<()> {
        (**self).write_store(prefs)
    }
}

impl<S: AttributeStore + ?Sized> AttributeStore for Box<S> {
    fn read_store(&self) -> Result<Option<PrefMap>> {
        (**self).read_store()
    }

    fn write_store(&mut self, prefs: PrefMap) -> Result<()> {
        (**self).write_store(prefs)
    }
}
