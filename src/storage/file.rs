use crate::{
    error::{Result, StudioError},
    models::PresetOption,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{AccessFlagStore, PresetRepository};

const PRESETS_FILE: &str = "presets.json";
const ACCESS_FILE: &str = "access.json";

#[derive(Debug, Serialize, Deserialize)]
struct AccessRecord {
    granted: bool,
    updated_at: chrono::DateTime<chrono::Utc>,
}

/// JSON files under a data directory, created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.path(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StudioError::StorageError(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Writes to a sibling temp file, then renames over the target.
    fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            StudioError::StorageError(format!("failed to create {}: {}", self.dir.display(), e))
        })?;
        let path = self.path(name);
        let tmp = self.path(&format!("{}.tmp", name));
        fs::write(&tmp, content)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                StudioError::StorageError(format!("failed to write {}: {}", path.display(), e))
            })
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.path(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StudioError::StorageError(format!(
                "failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

impl PresetRepository for FileStore {
    fn load(&self) -> Result<Option<Vec<PresetOption>>> {
        match self.read(PRESETS_FILE)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    fn save(&self, presets: &[PresetOption]) -> Result<()> {
        let content = serde_json::to_string_pretty(presets)?;
        self.write(PRESETS_FILE, &content)?;
        log::debug!("💾 Saved {} preset(s) to {}", presets.len(), self.dir.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.remove(PRESETS_FILE)
    }
}

impl AccessFlagStore for FileStore {
    fn is_granted(&self) -> Result<bool> {
        match self.read(ACCESS_FILE)? {
            Some(content) => {
                let record: AccessRecord = serde_json::from_str(&content)?;
                Ok(record.granted)
            }
            None => Ok(false),
        }
    }

    fn set_granted(&self, granted: bool) -> Result<()> {
        if !granted {
            return self.remove(ACCESS_FILE);
        }
        let record = AccessRecord {
            granted,
            updated_at: chrono::Utc::now(),
        };
        self.write(ACCESS_FILE, &serde_json::to_string(&record)?)
    }
}
