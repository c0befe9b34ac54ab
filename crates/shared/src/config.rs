//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Session store configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Summary document export configuration.
    #[serde(default)]
    pub export: ExportConfig,
    /// Share link configuration.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Session store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of live sessions kept in memory.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Seconds of inactivity after which a session is dropped.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_sessions() -> u64 {
    10_000
}

fn default_idle_timeout() -> u64 {
    3600 // 1 hour
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

/// Summary document export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// File name offered for the downloaded document.
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Currency symbol printed before the average cost.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_filename() -> String {
    "orcamento.pdf".to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Share link configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Subject line used by the mailto link.
    #[serde(default = "default_email_subject")]
    pub email_subject: String,
    /// Messaging deep link base; the encoded text is appended.
    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,
    /// Static Discord URL.
    #[serde(default = "default_discord_url")]
    pub discord_url: String,
    /// Static Instagram URL.
    #[serde(default = "default_instagram_url")]
    pub instagram_url: String,
}

fn default_email_subject() -> String {
    "Orçamento".to_string()
}

fn default_whatsapp_url() -> String {
    "https://wa.me/?text=".to_string()
}

fn default_discord_url() -> String {
    "https://discord.com/channels/@me".to_string()
}

fn default_instagram_url() -> String {
    "https://www.instagram.com/".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            email_subject: default_email_subject(),
            whatsapp_url: default_whatsapp_url(),
            discord_url: default_discord_url(),
            instagram_url: default_instagram_url(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "orcamento=debug,orcamento_api=debug,orcamento_core=debug,tower_http=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ORCAMENTO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
