use crate::config::RetrievalSettings;

/// Synchronous read access to the live retrieval settings.
pub trait ISettingsStore {
    fn get_settings(&self) -> RetrievalSettings;
}

/// A plain settings value acts as a fixed snapshot.
impl ISettingsStore for RetrievalSettings {
    fn get_settings(&self) -> RetrievalSettings {
        self.clone()
    }
}
