use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a loaded configuration
///
/// Checks that the start year is plausible for this portal, the base URL
/// parses as an HTTP(S) URL, and the user agent and output fields are
/// non-empty.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_start_year(config.crawler.start_year)?;
    validate_base_url(&config.crawler.base_url)?;

    require_non_empty("user-agent.crawler-name", &config.user_agent.crawler_name)?;
    require_non_empty("user-agent.crawler-version", &config.user_agent.crawler_version)?;
    require_non_empty("user-agent.contact-url", &config.user_agent.contact_url)?;
    require_non_empty("user-agent.contact-email", &config.user_agent.contact_email)?;
    require_non_empty("output.gazettes-path", &config.output.gazettes_path)?;

    Ok(())
}

/// The portal has no gazettes before 2015; a far-future year is a typo.
fn validate_start_year(year: i32) -> Result<(), ConfigError> {
    if !(2015..=2100).contains(&year) {
        return Err(ConfigError::Validation(format!(
            "crawler.start-year must be between 2015 and 2100, got {}",
            year
        )));
    }
    Ok(())
}

fn validate_base_url(base: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base).map_err(|e| {
        ConfigError::Validation(format!("crawler.base-url is not a valid URL: {}", e))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "crawler.base-url must be http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_start_year_too_early() {
        let mut config = Config::default();
        config.crawler.start_year = 2014;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_start_year_far_future() {
        let mut config = Config::default();
        config.crawler.start_year = 3000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.crawler.base_url = "not a url".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_non_http_base_url() {
        let mut config = Config::default();
        config.crawler.base_url = "ftp://example.com/".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_crawler_name() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_output_path() {
        let mut config = Config::default();
        config.output.gazettes_path = String::new();
        assert!(validate(&config).is_err());
    }
}
