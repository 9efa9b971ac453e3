//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// AI advisor configuration.
    #[serde(default)]
    pub advisor: AdvisorConfig,
    /// Email configuration for scheduled reports.
    #[serde(default)]
    pub email: EmailConfig,
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

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://data/kasku.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// AI advisor configuration.
///
/// The advisor is optional: an empty `api_key` disables it and the
/// corresponding endpoint responds with an explanatory error.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// API key for the generative model endpoint.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the Gemini-compatible API.
    #[serde(default = "default_advisor_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_advisor_model")]
    pub model: String,
    /// Household context prepended to the advisor prompt.
    ///
    /// The real context (goals, obligations) is private and belongs in the
    /// environment, not in version control.
    #[serde(default = "default_advisor_context")]
    pub user_context: String,
}

fn default_advisor_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_advisor_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_advisor_context() -> String {
    "User adalah keluarga yang ingin berhemat.".to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_advisor_base_url(),
            model: default_advisor_model(),
            user_context: default_advisor_context(),
        }
    }
}

/// Email configuration for the scheduled report task.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Whether the scheduled report task runs at all.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// From address for outbound mail.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// From display name for outbound mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Recipient of the scheduled report.
    #[serde(default)]
    pub report_to: String,
    /// Hours between scheduled reports.
    #[serde(default = "default_report_interval_hours")]
    pub report_interval_hours: u64,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_email() -> String {
    "noreply@kasku.local".to_string()
}

fn default_from_name() -> String {
    "Kasku".to_string()
}

fn default_report_interval_hours() -> u64 {
    24
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            report_to: String::new(),
            report_interval_hours: default_report_interval_hours(),
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
            .add_source(config::Environment::with_prefix("KASKU").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
