use crate::{
    error::{Result, StudioError},
    models::PresetOption,
};
use std::sync::Mutex;

use super::traits::{AccessFlagStore, PresetRepository};

#[derive(Debug, Default)]
pub struct MemoryStore {
    presets: Mutex<Option<Vec<PresetOption>>>,
    granted: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StudioError {
    StudioError::StorageError("memory store lock poisoned".into())
}

impl PresetRepository for MemoryStore {
    fn load(&self) -> Result<Option<Vec<PresetOption>>> {
        Ok(self.presets.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, presets: &[PresetOption]) -> Result<()> {
        *self.presets.lock().map_err(poisoned)? = Some(presets.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.presets.lock().map_err(poisoned)? = None;
        Ok(())
    }
}

impl AccessFlagStore for MemoryStore {
    fn is_granted(&self) -> Result<bool> {
        Ok(*self.granted.lock().map_err(poisoned)?)
    }

    fn set_granted(&self, granted: bool) -> Result<()> {
        *self.granted.lock().map_err(poisoned)? = granted;
        Ok(())
    }
}
