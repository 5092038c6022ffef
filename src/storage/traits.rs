use crate::{error::Result, models::PresetOption};

/// Where the editable preset catalog lives between runs.
pub trait PresetRepository: Send + Sync {
    /// `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<PresetOption>>>;
    fn save(&self, presets: &[PresetOption]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Remembers whether the access code was entered.
pub trait AccessFlagStore: Send + Sync {
    fn is_granted(&self) -> Result<bool>;
    fn set_granted(&self, granted: bool) -> Result<()>;
}
