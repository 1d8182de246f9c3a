use std::path::PathBuf;

use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub translation: TranslationSettings,
    pub workspace: WorkspaceSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub base_url: String,
    pub service_key: String,
    pub bucket: String,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub summary_model: String,
    pub chat_fallback_model: String,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub command: String,
}

#[derive(Debug, Clone)]
pub struct WorkspaceSettings {
    pub scratch_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: &'static str, message: String },
}

fn required(name: &'static str) -> Result<String, SettingsError> {
    std::env::var(name).map_err(|_| SettingsError::MissingVar(name))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    /// Builds settings from the process environment. `.env` loading (via
    /// dotenvy) happens in `main` before this runs.
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment: Environment = optional("APP_ENVIRONMENT", "local")
            .parse()
            .map_err(|message| SettingsError::InvalidVar {
                name: "APP_ENVIRONMENT",
                message,
            })?;

        let port: u16 = optional("SERVER_PORT", "3000")
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "SERVER_PORT",
                message: format!("{e}"),
            })?;

        Ok(Self {
            environment,
            server: ServerSettings {
                host: optional("SERVER_HOST", "0.0.0.0"),
                port,
            },
            database: DatabaseSettings {
                url: required("DATABASE_URL")?,
                max_connections: 5,
            },
            storage: StorageSettings {
                base_url: required("SUPABASE_URL")?,
                service_key: required("SUPABASE_SERVICE_KEY")?,
                bucket: optional("STORAGE_BUCKET", "files"),
            },
            llm: LlmSettings {
                // Empty key means: LLM calls fail recoverably and translation
                // is skipped. The server still starts.
                api_key: optional("GEMINI_API_KEY", ""),
                summary_model: optional("SUMMARY_MODEL", "gemini-2.5-flash-lite"),
                chat_fallback_model: optional("CHAT_FALLBACK_MODEL", "gemini-pro"),
            },
            translation: TranslationSettings {
                command: optional("PDF2ZH_COMMAND", "pdf2zh"),
            },
            workspace: WorkspaceSettings {
                scratch_dir: PathBuf::from(optional("TEMP_DIR", "temp_pdfs")),
            },
        })
    }
}
