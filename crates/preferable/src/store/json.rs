use super::{AttributeStore, PrefMap};
use crate::error::{PreferableError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Preferences blob persisted as a single JSON file.
///
/// A missing file reads as "nothing stored". Writes go to a temp file in the
/// same directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl AttributeStore for JsonFileStore {
    fn read_store(&self) -> Result<Option<PrefMap>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(PreferableError::Io)?;
        let prefs: PrefMap =
            serde_json::from_str(&content).map_err(PreferableError::Serialization)?;
        Ok(Some(prefs))
    }

    fn write_store(&mut self, prefs: PrefMap) -> Result<()> {
        let dir = self.dir().to_path_buf();
        fs::create_dir_all(&dir).map_err(PreferableError::Io)?;

        let content =
            serde_json::to_string_pretty(&prefs).map_err(PreferableError::Serialization)?;

        let tmp_file = dir.join(format!(".prefs-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(PreferableError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(PreferableError::Io)?;

        tracing::debug!(
            path = %self.path.display(),
            entries = prefs.len(),
            "Wrote preferences file"
        );
        Ok(())
    }
}
