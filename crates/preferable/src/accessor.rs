//! Per-preference read/write behavior.
//!
//! A [`PreferenceAccessor`] is built for every declared preference and holds
//! nothing but the preference's metadata and the class config. All state
//! lives in the [`AttributeStore`] passed to each call.

use crate::coerce::{coerce, coerce_value};
use crate::config::PreferableConfig;
use crate::error::Result;
use crate::meta::PreferenceMetadata;
use crate::store::{AttributeStore, PrefMap};
use crate::value::PrefValue;

/// Result of a write through an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The coerced value was stored.
    Stored,

    /// The coerced value is not one of the declared options; nothing was
    /// written and the previous value (or default) remains.
    Rejected,
}

impl WriteOutcome {
    pub fn is_stored(self) -> bool {
        matches!(self, WriteOutcome::Stored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceAccessor {
    meta: PreferenceMetadata,
    config: PreferableConfig,
}

impl PreferenceAccessor {
    pub fn new(meta: PreferenceMetadata, config: PreferableConfig) -> Self {
        Self { meta, config }
    }

    pub fn name(&self) -> &str {
        self.meta.name()
    }

    pub fn meta(&self) -> &PreferenceMetadata {
        &self.meta
    }

    /// Current value: the stored value coerced to the declared type, or the
    /// default when nothing usable is stored.
    pub fn read<S: AttributeStore + ?Sized>(&self, store: &S) -> Result<Option<PrefValue>> {
        Ok(self.value_in(store.read_store()?.as_ref()))
    }

    /// Same as [`read`](Self::read), against a blob that was already loaded.
    pub fn value_in(&self, prefs: Option<&PrefMap>) -> Option<PrefValue> {
        let stored = prefs.and_then(|prefs| prefs.get(self.name()));
        let value = if self.config.coerce_on_read {
            coerce(stored, self.meta.pref_type())
        } else {
            stored.cloned()
        };
        value.or_else(|| self.meta.default().cloned())
    }

    /// Coerce `raw` and store it, unless it falls outside the declared options.
    ///
    /// The blob is read, copied, updated and written back whole.
    pub fn write<S: AttributeStore + ?Sized>(
        &self,
        store: &mut S,
        raw: impl Into<PrefValue>,
    ) -> Result<WriteOutcome> {
        let value = coerce_value(&raw.into(), self.meta.pref_type());

        if self.config.reject_invalid_options && !self.meta.allows(&value) {
            tracing::warn!(
                pref = self.name(),
                value = %value,
                "Ignoring value outside declared options"
            );
            return Ok(WriteOutcome::Rejected);
        }

        let mut prefs = store.read_store()?.unwrap_or_default();
        prefs.insert(self.name().to_string(), value);
        store.write_store(prefs)?;
        tracing::debug!(pref = self.name(), "Stored preference");
        Ok(WriteOutcome::Stored)
    }

    /// Remove any stored value so reads fall back to the default.
    /// Returns whether a value was removed.
    pub fn clear<S: AttributeStore + ?Sized>(&self, store: &mut S) -> Result<bool> {
        let Some(mut prefs) = store.read_store()? else {
            return Ok(false);
        };
        if prefs.remove(self.name()).is_none() {
            return Ok(false);
        }
        store.write_store(prefs)?;
        Ok(true)
    }

    /// Whether the store holds an explicit value for this preference.
    pub fn is_stored<S: AttributeStore + ?Sized>(&self, store: &S) -> Result<bool> {
        Ok(store
            .read_store()?
            .is_some_and(|prefs| prefs.contains_key(self.name())))
    }
}
