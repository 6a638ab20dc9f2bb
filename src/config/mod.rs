//! Configuration loading and validation
//!
//! Configuration is TOML. Every field has a built-in default, so the
//! crawler runs with no config file at all; a file is only needed to
//! override the user agent, output path, or (for testing) the portal base.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
