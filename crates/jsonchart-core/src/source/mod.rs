//! Where chart payloads come from: a URL, a local file, or stdin.

pub mod decode;
pub mod fetch;
pub mod read;

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// A user-supplied payload location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// Interpret user input. Surrounding whitespace is ignored.
    ///
    /// `http://` and `https://` prefixes select a URL, `-` selects stdin,
    /// anything else is a file path.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SourceError::Empty);
        }
        if trimmed == "-" {
            return Ok(Source::Stdin);
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Source::Url(trimmed.to_string()));
        }
        Ok(Source::Path(PathBuf::from(trimmed)))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Failures while obtaining or decoding a payload.
///
/// These never reach the normalizer; the caller reports them or swaps in
/// sample data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("please enter a valid URL")]
    Empty,

    #[error("failed to read {location}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("payload is not valid JSON")]
    Decode(#[source] serde_json::Error),
}
