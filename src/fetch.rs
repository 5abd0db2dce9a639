use reqwest::blocking::Client;
use url::Url;

use crate::error::PagefreqError;
use crate::Config;

/// Source of raw page markup.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, PagefreqError>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String, PagefreqError>,
{
    fn fetch(&self, url: &str) -> Result<String, PagefreqError> {
        self(url)
    }
}

/// Check that `raw` is an absolute http(s) URL.
pub fn validate_url(raw: &str) -> Result<Url, PagefreqError> {
    let invalid = |reason: String| PagefreqError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

/// Blocking HTTP fetcher. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, PagefreqError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(PagefreqError::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, PagefreqError> {
        let parsed = validate_url(url)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url, "fetching");

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| PagefreqError::Request {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PagefreqError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        // Decodes using the charset from Content-Type, UTF-8 otherwise.
        let body = response.text().map_err(|source| PagefreqError::Body {
            url: url.to_owned(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");

        Ok(body)
    }
}
