use super::Preferences;
use crate::error::{CardzError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed preferences: one JSON object of strings per namespace.
pub struct FilePreferences {
    dir: PathBuf,
    namespace: String,
}

impl FilePreferences {
    pub fn new(dir: impl Into<PathBuf>, namespace: &str) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.to_string(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.namespace))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CardzError::Io)?;
        }
        Ok(())
    }

    /// Reads every key in the namespace. A file that does not parse reads as
    /// empty, so the next write replaces it.
    fn load_values(&self) -> Result<BTreeMap<String, String>> {
        let file = self.path();
        if !file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&file).map_err(CardzError::Io)?;
        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                log::warn!("ignoring unreadable {}: {}", file.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn save_values(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.dir)?;

        let content = serde_json::to_string_pretty(values).map_err(CardzError::Serialization)?;

        let tmp_file = self
            .dir
            .join(format!(".{}-{}.tmp", self.namespace, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CardzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CardzError::Io(e));
        }

        log::debug!("wrote {} key(s) to {}", values.len(), self.path().display());
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_values()?.remove(key))
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load_values()?;
        values.insert(key.to_string(), value.to_string());
        self.save_values(&values)
    }
}
