use reqwest::blocking::Client;

use crate::source::{FetchOptions, SourceError};

/// GET `url` and return the body bytes.
///
/// Any non-2xx status is a failure; the body of an error response is
/// never handed on for decoding.
pub fn fetch_url(url: &str, options: &FetchOptions) -> Result<Vec<u8>, SourceError> {
    let http = |source: reqwest::Error| SourceError::Http {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .timeout(options.timeout)
        .user_agent(concat!("jsonchart/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(http)?;

    tracing::debug!(url, "fetching chart payload");
    let response = client.get(url).send().map_err(http)?;

    check_status(url, response.status().as_u16())?;

    let body = response.bytes().map_err(http)?;
    tracing::debug!(url, bytes = body.len(), "fetched chart payload");
    Ok(body.to_vec())
}

/// Accept 2xx only.
pub fn check_status(url: &str, status: u16) -> Result<(), SourceError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SourceError::Status {
            url: url.to_string(),
            status,
        })
    }
}
