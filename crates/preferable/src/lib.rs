//! # Preferable Architecture
//!
//! Preferable is a **typed preference registry**. A class declares named,
//! typed, defaulted settings; every instance keeps their values in one opaque
//! key/value blob rather than in individual fields, so the set of settings can
//! evolve without a storage migration.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Instance Facade (facade.rs)                                │
//! │  - get/set by name, group queries, default seeding          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Class Descriptor (class.rs)                                │
//! │  - Schema + one accessor per declared preference            │
//! │  - Subclasses start from a snapshot of the parent schema    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Schema & Metadata (schema.rs, meta.rs)                     │
//! │  - Ordered name → metadata registry                         │
//! │  - Type resolved once, at declaration                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Accessors & Coercion (accessor.rs, coerce.rs)              │
//! │  - Read: stored value coerced, or the default               │
//! │  - Write: coerce, check options, replace the blob           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Attribute Store (store/)                                   │
//! │  - AttributeStore trait: read blob / replace blob           │
//! │  - MemoryStore, JsonFileStore                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use preferable::{MemoryStore, PrefValue, PreferableClass, PreferenceOptions, Preferences};
//!
//! let mut base = PreferableClass::new("Base");
//! base.declare("base_boolean", PreferenceOptions::new().default(false).group("base"));
//! let mut sub = base.subclass("Sub1");
//! sub.declare("sub_1_pref", PreferenceOptions::new().default("Hello there"));
//!
//! let mut prefs = Preferences::new(&sub, MemoryStore::new());
//! assert_eq!(prefs.get("sub_1_pref")?, Some(PrefValue::from("Hello there")));
//!
//! prefs.set("base_boolean", "true")?;
//! assert_eq!(prefs.get("base_boolean")?, Some(PrefValue::Boolean(true)));
//! # Ok::<(), preferable::PreferableError>(())
//! ```
//!
//! ## Threading
//!
//! Everything is synchronous and single-owner. Declare preferences during
//! startup, before any instance reads or writes; share instances across
//! threads only behind the caller's own synchronization.
//!
//! ## Module Overview
//!
//! - [`value`]: `PrefValue`, `Symbol`, `ScalarType`
//! - [`meta`]: `PrefType`, `PreferenceOptions`, `PreferenceMetadata`
//! - [`coerce`]: Best-effort coercion to a declared type
//! - [`schema`]: `ClassPreferenceSchema`
//! - [`accessor`]: `PreferenceAccessor`, `WriteOutcome`
//! - [`class`]: `PreferableClass`
//! - [`filter`]: `GroupFilter`
//! - [`facade`]: `Preferences`
//! - [`store`]: `AttributeStore` and implementations
//! - [`config`]: `PreferableConfig`
//! - [`error`]: `PreferableError`

pub mod accessor;
pub mod class;
pub mod coerce;
pub mod config;
pub mod error;
pub mod facade;
pub mod filter;
pub mod meta;
pub mod schema;
pub mod store;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;

pub use accessor::{PreferenceAccessor, WriteOutcome};
pub use class::PreferableClass;
pub use coerce::{coerce, coerce_value};
pub use config::PreferableConfig;
pub use error::{PreferableError, Result};
pub use facade::{PrefValues, Preferences};
pub use filter::GroupFilter;
pub use meta::{PrefType, PreferenceMetadata, PreferenceOptions};
pub use schema::ClassPreferenceSchema;
pub use store::json::JsonFileStore;
pub use store::memory::MemoryStore;
pub use store::{AttributeStore, PrefMap};
pub use value::{PrefValue, ScalarType, Symbol};
