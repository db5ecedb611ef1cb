//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::time::Duration;

use card_core::{DateFormatter, DisplayLocale};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub web: ServerConfig,
    pub backend: BackendConfig,
    pub site: SiteConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How the notice list is requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoticesTransport {
    /// Plain JSON response
    #[default]
    Json,
    /// Response wrapped in a JSONP callback invocation
    Jsonp,
}

/// Backend (spreadsheet web app) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub api_base: String,
    #[serde(default)]
    pub notices_transport: NoticesTransport,
    #[serde(default = "default_jsonp_callback")]
    pub jsonp_callback: String,
    /// Request timeout; unset means the client waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Site branding and presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_org_label")]
    pub org_label: String,
    #[serde(default = "default_org_name")]
    pub org_name: String,
    #[serde(default = "default_homepage_url")]
    pub homepage_url: String,
    #[serde(default = "default_logo_path")]
    pub logo_path: String,
    /// Audio asset; the player widget is only shown when set
    #[serde(default)]
    pub audio_path: Option<String>,
    #[serde(skip, default)]
    pub locale: DisplayLocale,
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl SiteConfig {
    /// Date formatter for this site's locale and time zone
    ///
    /// # Errors
    /// Returns an error if the UTC offset is out of range
    pub fn date_formatter(&self) -> Result<DateFormatter, ConfigError> {
        DateFormatter::with_offset_minutes(self.locale, self.utc_offset_minutes).ok_or_else(|| {
            ConfigError::InvalidValue(
                "SITE_UTC_OFFSET_MINUTES",
                self.utc_offset_minutes.to_string(),
            )
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            org_label: default_org_label(),
            org_name: default_org_name(),
            homepage_url: default_homepage_url(),
            logo_path: default_logo_path(),
            audio_path: None,
            locale: DisplayLocale::default(),
            utc_offset_minutes: default_utc_offset_minutes(),
            static_dir: default_static_dir(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "member-card".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_jsonp_callback() -> String {
    "handleNoticesResponse".to_string()
}

fn default_org_label() -> String {
    "一般社団法人".to_string()
}

fn default_org_name() -> String {
    "セルフラブ協会".to_string()
}

fn default_homepage_url() -> String {
    "https://selflove.or.jp/".to_string()
}

fn default_logo_path() -> String {
    "/static/logo.png".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    540 // JST
}

fn default_static_dir() -> String {
    "./assets".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: match var("APP_ENV") {
                    Some(s) => parse_environment(&s)
                        .ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
                    None => Environment::default(),
                },
            },
            web: ServerConfig {
                host: var("WEB_HOST").unwrap_or_else(default_host),
                port: parse_required(&var, "WEB_PORT")?,
            },
            backend: BackendConfig {
                api_base: var("BACKEND_API_BASE")
                    .ok_or(ConfigError::MissingVar("BACKEND_API_BASE"))?,
                notices_transport: match var("BACKEND_NOTICES_TRANSPORT") {
                    Some(s) => match s.trim().to_lowercase().as_str() {
                        "json" => NoticesTransport::Json,
                        "jsonp" => NoticesTransport::Jsonp,
                        _ => return Err(ConfigError::InvalidValue("BACKEND_NOTICES_TRANSPORT", s)),
                    },
                    None => NoticesTransport::default(),
                },
                jsonp_callback: var("BACKEND_JSONP_CALLBACK").unwrap_or_else(default_jsonp_callback),
                timeout_secs: parse_optional(&var, "BACKEND_TIMEOUT_SECS")?,
            },
            site: SiteConfig {
                org_label: var("SITE_ORG_LABEL").unwrap_or_else(default_org_label),
                org_name: var("SITE_ORG_NAME").unwrap_or_else(default_org_name),
                homepage_url: var("SITE_HOMEPAGE_URL").unwrap_or_else(default_homepage_url),
                logo_path: var("SITE_LOGO_PATH").unwrap_or_else(default_logo_path),
                audio_path: var("SITE_AUDIO_PATH"),
                locale: match var("SITE_LOCALE") {
                    Some(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SITE_LOCALE", s))?,
                    None => DisplayLocale::default(),
                },
                utc_offset_minutes: parse_optional(&var, "SITE_UTC_OFFSET_MINUTES")?
                    .unwrap_or_else(default_utc_offset_minutes),
                static_dir: var("STATIC_DIR").unwrap_or_else(default_static_dir),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_optional(&var, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_optional(&var, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    fn validate(&self) -> Result<(), ConfigError> {
        let base = self.backend.api_base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "BACKEND_API_BASE",
                self.backend.api_base.clone(),
            ));
        }
        if self.backend.jsonp_callback.is_empty()
            || !self
                .backend
                .jsonp_callback
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.')
        {
            return Err(ConfigError::InvalidValue(
                "BACKEND_JSONP_CALLBACK",
                self.backend.jsonp_callback.clone(),
            ));
        }
        if self.rate_limit.requests_per_second == 0 || self.rate_limit.burst == 0 {
            return Err(ConfigError::InvalidValue(
                "RATE_LIMIT_REQUESTS_PER_SECOND",
                "rate limit values must be positive".to_string(),
            ));
        }
        self.site.date_formatter()?;
        Ok(())
    }
}

fn parse_environment(s: &str) -> Option<Environment> {
    match s.to_lowercase().as_str() {
        "production" => Some(Environment::Production),
        "staging" => Some(Environment::Staging),
        "development" => Some(Environment::Development),
        _ => None,
    }
}

fn parse_required<T, F>(var: &F, key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    parse_optional(var, key)?.ok_or(ConfigError::MissingVar(key))
}

fn parse_optional<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, s.clone()))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
