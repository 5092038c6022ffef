//! The editable preset catalog.
//!
//! Every mutation is written back to the repository immediately; the shell
//! only ever hands the composer the prompt details of the selected entries.

use crate::{
    error::{Result, StudioError},
    models::{default_presets, PresetCategory, PresetOption},
    storage::PresetRepository,
};
use std::sync::Arc;

pub struct PresetCatalog {
    repository: Arc<dyn PresetRepository>,
    presets: Vec<PresetOption>,
}

impl PresetCatalog {
    /// Loads the stored catalog, or the built-in one when nothing is stored.
    pub fn open(repository: Arc<dyn PresetRepository>) -> Result<Self> {
        let presets = match repository.load()? {
            Some(presets) => presets,
            None => {
                log::debug!("No stored presets, starting from the built-in catalog");
                default_presets()
            }
        };
        Ok(Self {
            repository,
            presets,
        })
    }

    pub fn all(&self) -> &[PresetOption] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&PresetOption> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: PresetCategory) -> Vec<&PresetOption> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Prompt details of the selected presets, in catalog order.
    pub fn fragments_for<S: AsRef<str>>(&self, selected_ids: &[S]) -> Vec<String> {
        self.presets
            .iter()
            .filter(|p| selected_ids.iter().any(|id| id.as_ref() == p.id))
            .map(|p| p.prompt_detail.clone())
            .collect()
    }

    /// Selected ids that match nothing in the catalog.
    pub fn unknown_ids<'a, S: AsRef<str>>(&self, selected_ids: &'a [S]) -> Vec<&'a str> {
        selected_ids
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| self.get(id).is_none())
            .collect()
    }

    pub fn add(
        &mut self,
        label: &str,
        description: Option<&str>,
        prompt_detail: &str,
        category: PresetCategory,
    ) -> Result<&PresetOption> {
        let label = label.trim();
        let prompt_detail = prompt_detail.trim();
        if label.is_empty() || prompt_detail.is_empty() {
            return Err(StudioError::InputError(
                "a preset needs both a label and a prompt".into(),
            ));
        }

        let preset = PresetOption {
            id: self.next_custom_id(),
            label: label.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            prompt_detail: prompt_detail.to_string(),
            category,
        };
        log::info!("➕ Adding preset {} ({})", preset.id, preset.category);
        let mut next = self.presets.clone();
        next.push(preset);
        self.commit(next)?;

        let index = self.presets.len() - 1;
        Ok(&self.presets[index])
    }

    /// Returns the removed entry, or `None` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> Result<Option<PresetOption>> {
        let Some(index) = self.presets.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let mut next = self.presets.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        log::info!("🗑️  Removed preset {}", removed.id);
        Ok(Some(removed))
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.commit(default_presets())?;
        log::info!("♻️  Preset catalog reset to {} built-in entries", self.presets.len());
        Ok(())
    }

    /// Stores `next`, and only then makes it the in-memory catalog.
    fn commit(&mut self, next: Vec<PresetOption>) -> Result<()> {
        self.repository.save(&next)?;
        self.presets = next;
        Ok(())
    }

    fn next_custom_id(&self) -> String {
        let base = format!("custom-{}", chrono::Utc::now().timestamp_millis());
        if self.get(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or(base)
    }
}
