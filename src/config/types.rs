use crate::url::{DEFAULT_START_YEAR, PORTAL_BASE};
use serde::Deserialize;

/// Main configuration structure for the gazette crawler
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// First year to enumerate a listing chain for
    #[serde(rename = "start-year", default = "default_start_year")]
    pub start_year: i32,

    /// Listing base URL; defaults to the live portal. Overridable so the
    /// crawl loop can run against a local test server.
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON-lines file gazette records are appended to
    #[serde(rename = "gazettes-path", default = "default_gazettes_path")]
    pub gazettes_path: String,
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_base_url() -> String {
    PORTAL_BASE.to_string()
}

fn default_crawler_name() -> String {
    "diario-fortaleza".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://example.org/diario-fortaleza".to_string()
}

fn default_contact_email() -> String {
    "crawler@example.org".to_string()
}

fn default_gazettes_path() -> String {
    "./gazettes.jsonl".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            base_url: default_base_url(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            gazettes_path: default_gazettes_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
