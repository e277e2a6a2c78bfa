use crate::llm::GenerationSettings;
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// Prefix of environment variables read by the `config` layer
/// (e.g. `MUSEUM_SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "MUSEUM";

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Identifier sent as X-App-Id to the generation endpoint
    #[arg(long, env = "APP_ID")]
    pub app_id: Option<String>,

    /// Submission store: memory, postgres or supabase
    #[arg(long, env = "PERSISTENCE_PROVIDER")]
    pub persistence_provider: Option<String>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,

    /// Expose the submissions listing
    #[arg(long, env = "ADMIN_ENABLED")]
    pub admin_enabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub guide: GuideConfig,
    pub persistence: PersistenceConfig,
    pub resilience: ResilienceConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`
    pub static_dir: String,
}

#[derive(Deserialize, Clone)]
pub struct GuideConfig {
    pub base_url: String,
    pub model: String,
    pub app_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for GuideConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuideConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GuideConfig {
    /// Settings for the generation driver. A blank API key counts as unset.
    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            app_id: self.app_id.clone(),
            api_key: self
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceProvider {
    #[default]
    Memory,
    Postgres,
    Supabase,
}

#[derive(Deserialize, Clone)]
pub struct PersistenceConfig {
    pub provider: PersistenceProvider,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_key: Option<String>,
}

impl std::fmt::Debug for PersistenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceConfig")
            .field("provider", &self.provider)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub timeout_secs: u64,
    pub requests_per_second: f32,
    pub burst_size: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub enabled: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("guide.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("guide.model", "gemini-2.5-flash")?
            .set_default("guide.app_id", "museum-site")?
            .set_default("persistence.provider", "memory")?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.timeout_secs", 30)?
            .set_default("resilience.requests_per_second", 5.0)?
            .set_default("resilience.burst_size", 10.0)?
            .set_default("admin.enabled", false)?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml));
        }

        // 3. Environment variables (MUSEUM_SECTION__KEY)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags and their env aliases
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(app_id) = cli.app_id.filter(|id| !id.trim().is_empty()) {
            builder = builder.set_override("guide.app_id", app_id)?;
        }
        if let Some(provider) = cli.persistence_provider {
            builder = builder.set_override("persistence.provider", provider.to_lowercase())?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }
        if let Some(admin) = cli.admin_enabled {
            builder = builder.set_override("admin.enabled", admin)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_settings_drop_blank_key() {
        let guide = GuideConfig {
            base_url: "https://example.test".to_string(),
            model: "m".to_string(),
            app_id: "app".to_string(),
            api_key: Some("  ".to_string()),
        };
        assert!(guide.generation_settings().api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let persistence = PersistenceConfig {
            provider: PersistenceProvider::Supabase,
            database_url: Some("postgres://user:pw@db/museum".to_string()),
            supabase_url: Some("https://project.supabase.co".to_string()),
            supabase_key: Some("service-role".to_string()),
        };
        let debug = format!("{persistence:?}");
        assert!(!debug.contains("service-role"));
        assert!(!debug.contains("pw@db"));
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let err = AppConfig::load_from_args(["museum-site", "--no-such-flag"]).unwrap_err();
        assert!(err.to_string().contains("no-such-flag"));
    }
}
