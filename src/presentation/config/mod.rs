mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LlmSettings, ServerSettings, Settings, SettingsError, StorageSettings,
    TranslationSettings, WorkspaceSettings,
};
