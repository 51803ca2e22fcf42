use super::{AttributeStore, PrefMap};
use crate::error::{PreferableError, Result};

/// In-memory preferences blob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    prefs: Option<PrefMap>,
    writes: usize,
    simulate_write_error: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob, e.g. one the host deserialized.
    pub fn with_prefs(prefs: PrefMap) -> Self {
        Self {
            prefs: Some(prefs),
            ..Self::default()
        }
    }

    pub fn prefs(&self) -> Option<&PrefMap> {
        self.prefs.as_ref()
    }

    /// Number of successful `write_store` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl AttributeStore for MemoryStore {
    fn read_store(&self) -> Result<Option<PrefMap>> {
        Ok(self.prefs.clone())
    }

    fn write_store(&mut self, prefs: PrefMap) -> Result<()> {
        if self.simulate_write_error {
            return Err(PreferableError::Store("Simulated write error".to_string()));
        }
        self.prefs = Some(prefs);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrefValue;

    #[test]
    fn fresh_store_reads_absent() {
        assert_eq!(MemoryStore::new().read_store().unwrap(), None);
    }

    #[test]
    fn write_replaces_blob() {
        let mut store = MemoryStore::new();
        let mut prefs = PrefMap::new();
        prefs.insert("a".into(), PrefValue::from(1));
        store.write_store(prefs.clone()).unwrap();

        let mut next = PrefMap::new();
        next.insert("b".into(), PrefValue::from(2));
        store.write_store(next.clone()).unwrap();

        assert_eq!(store.read_store().unwrap(), Some(next));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn read_returns_a_copy() {
        let store = MemoryStore::with_prefs(PrefMap::new());
        let mut copy = store.read_store().unwrap().unwrap();
        copy.insert("x".into(), PrefValue::from(true));
        assert_eq!(store.prefs(), Some(&PrefMap::new()));
    }

    #[test]
    fn simulated_write_error_keeps_previous_blob() {
        let mut store = MemoryStore::with_prefs(PrefMap::new());
        store.set_simulate_write_error(true);
        let err = store.write_store(PrefMap::new()).unwrap_err();
        assert!(matches!(err, PreferableError::Store(_)));
        assert_eq!(store.writes(), 0);
    }
}
