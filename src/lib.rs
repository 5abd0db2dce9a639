//! Word and phrase frequency audits of web pages.
//!
//! `pagefreq` fetches pages and counts the words in each DOM region (linked
//! vs unlinked text, footer, navigation, body) plus the most frequent one-,
//! two- and three-word phrases of the whole page, so a site's on-page text
//! can be compared against its competitors'.
//!
//! # Quick start
//!
//! ```rust
//! use pagefreq::{Category, Report};
//!
//! let html = "<html><body><a>Click here</a><p>Plain text</p></body></html>";
//! let report = Report::from_html("https://example.com", html);
//! assert_eq!(report.category(Category::LinkedWords).get("click"), 1);
//! println!("{}", pagefreq::render_text(&report, 10));
//! ```

mod category;
mod error;
mod extract;
mod fetch;
mod frequency;
mod render;
mod report;
mod tokenize;

pub use category::Category;
pub use error::PagefreqError;
pub use extract::{extract_text, text_leaves, Linkage, Region, TextSelector};
pub use fetch::{validate_url, Fetcher, HttpFetcher};
pub use frequency::{count_ngrams, count_tokens, FrequencyTable};
pub use render::{
    render_failure, render_json, render_json_failure, render_text, TextReport, NO_PHRASES,
    NO_WORDS,
};
pub use report::{CategoryCounts, PhraseCounts, Report, PHRASE_SIZES};
pub use tokenize::tokenize;

use std::time::Duration;

/// Settings for fetching and presentation.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Entries shown per category and phrase list.
    pub top_k: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: 10,
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Config {
    pub fn with_top_k(mut self, n: usize) -> Self {
        self.top_k = n;
        self
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}

/// Outcome of analyzing one URL.
#[derive(Debug)]
pub struct Analysis {
    pub url: String,
    pub result: Result<Report, PagefreqError>,
}

/// Candidate URLs from a multi-line block: one per line, trimmed, blank
/// lines skipped.
pub fn parse_url_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Fetch `url` and build its report.
pub fn analyze_url<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> Result<Report, PagefreqError> {
    let html = fetcher.fetch(url)?;
    Ok(Report::from_html(url, &html))
}

/// Analyze every URL in `input`, one at a time.
///
/// The iterator is lazy: each URL is fetched only when its [`Analysis`] is
/// pulled, so a caller can present one result before the next fetch starts.
/// A failed URL never affects the others.
pub fn analyze_batch<'a, F: Fetcher + ?Sized>(
    fetcher: &'a F,
    input: &'a str,
) -> impl Iterator<Item = Analysis> + 'a {
    parse_url_lines(input).into_iter().map(move |url| {
        let result = analyze_url(fetcher, url);

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::warn!(url, error = %err, "analysis failed");
            }
        }

        Analysis {
            url: url.to_owned(),
            result,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_lines_skips_blank() {
        let input = "https://a.example\n\n   \n  https://b.example  \r\nhttps://c.example";
        assert_eq!(
            parse_url_lines(input),
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_parse_url_lines_empty() {
        assert!(parse_url_lines("").is_empty());
        assert!(parse_url_lines("\n\n").is_empty());
    }

    #[test]
    fn test_config_builder() {
        let c = Config::default()
            .with_top_k(3)
            .with_timeout(Duration::from_secs(2))
            .with_user_agent("x/1");
        assert_eq!(c.top_k, 3);
        assert_eq!(c.timeout, Duration::from_secs(2));
        assert_eq!(c.user_agent, "x/1");
    }

    #[test]
    fn test_default_user_agent_names_crate() {
        assert!(Config::default().user_agent.starts_with("pagefreq/"));
    }
}
