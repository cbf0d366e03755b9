//! HTTP client for fetching listing pages
//!
//! Thin wrapper over reqwest with a fixed identifying user-agent and a
//! request timeout. No retries: the caller decides whether to retry or move
//! on to the next page.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use thiserror::Error;

/// Fetch failures, kept separate from data-absence conditions.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or body-read failure.
    #[error("Network failure fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },
}

impl FetchError {
    /// Status code for HTTP-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}

/// HTTP client configuration for scraping.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("shopscrape/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 10,
            follow_redirects: true,
        }
    }
}

/// HTTP client with a fixed user-agent header on every request.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// GET a URL and return the raw markup.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let client = HttpClient::new(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let config = HttpClientConfig {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(HttpClient::new(config).is_err());
    }

    #[test]
    fn http_status_error_carries_the_code() {
        let err = FetchError::HttpStatus {
            status: 404,
            url: "https://example.com/missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn non_2xx_response_yields_http_status_error() {
        use std::io::{Read, Write};

        // One-shot server on an ephemeral port answering 404 to anything.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream
                .write_all(
                    b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                )
                .unwrap();
        });

        let client = HttpClient::new(HttpClientConfig::default()).unwrap();
        let err = client
            .fetch_text(&format!("http://{addr}/missing"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        let client = HttpClient::new(HttpClientConfig::default()).unwrap();
        // Port 1 is never listening.
        let err = client.fetch_text("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
        assert_eq!(err.status(), None);
    }
}
