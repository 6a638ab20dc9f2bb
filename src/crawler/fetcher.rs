//! HTTP fetcher for listing pages
//!
//! Thin wrapper over reqwest: builds a client identifying the crawler and
//! fetches one listing page body at a time. There is no retry here; a
//! failed fetch ends the year-chain it belongs to and the engine around
//! this crate owns any retry policy.

use crate::config::UserAgentConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// The user agent is formatted as `Name/Version (+ContactURL; ContactEmail)`.
/// The portal serves plain HTTP, so HTTPS is not enforced.
///
/// # Example
///
/// ```no_run
/// use diario_fortaleza::config::UserAgentConfig;
/// use diario_fortaleza::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page and returns its HTML body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The rendered listing-page URL
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(FetchError)` - Transport failure, non-success status, or a URL
///   that does not parse
pub async fn fetch_listing(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidAddress {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let client = build_http_client(&create_test_config()).unwrap();
        let result = fetch_listing(&client, "not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidAddress { .. })));
    }

    // Status and transport errors are covered by the wiremock integration
    // tests.
}
