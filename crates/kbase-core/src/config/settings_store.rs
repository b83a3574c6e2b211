use std::sync::RwLock;

use tracing::info;

use super::settings::{RetrievalSettings, SettingsPatch};
use crate::errors::KbaseResult;
use crate::traits::ISettingsStore;

/// Process-wide settings owned by the administrative side.
///
/// The engine only ever reads a snapshot through `ISettingsStore`;
/// writers replace the whole snapshot under the lock.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    current: RwLock<RetrievalSettings>,
    initial: RetrievalSettings,
}

impl InMemorySettingsStore {
    pub fn new(initial: RetrievalSettings) -> Self {
        Self {
            current: RwLock::new(initial.clone()),
            initial,
        }
    }

    /// Merge a partial update. The store is left untouched when the merged
    /// settings fail validation.
    pub fn update(&self, patch: &SettingsPatch) -> KbaseResult<RetrievalSettings> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = guard.merged(patch);
        next.validate()?;
        *guard = next.clone();
        info!(settings = ?next, "retrieval settings updated");
        Ok(next)
    }

    /// Restore the settings the store was created with.
    pub fn reset(&self) -> RetrievalSettings {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = self.initial.clone();
        info!(settings = ?self.initial, "retrieval settings reset");
        self.initial.clone()
    }
}

impl ISettingsStore for InMemorySettingsStore {
    fn get_settings(&self) -> RetrievalSettings {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
