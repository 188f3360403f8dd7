use std::fs;
use std::io::Read;

use sha2::{Digest, Sha256};

use crate::report::model::{PayloadHash, SourceInfo};
use crate::source::{FetchOptions, Source, SourceError, fetch};

/// Raw payload context for a single run.
///
/// Holds the exact bytes that were decoded and a fingerprint that
/// identifies them.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Where the bytes came from (informational only).
    pub location: String,

    /// Exact payload bytes.
    pub bytes: Vec<u8>,

    pub size_bytes: u64,

    pub hash_alg: String,

    /// Hex-encoded hash of the payload bytes.
    pub hash_hex: String,
}

impl SourceContext {
    pub fn from_bytes(location: impl Into<String>, bytes: Vec<u8>) -> Self {
        let digest = Sha256::digest(&bytes);

        Self {
            location: location.into(),
            size_bytes: bytes.len() as u64,
            bytes,
            hash_alg: "sha256".to_string(),
            hash_hex: hex::encode(digest),
        }
    }

    /// Convert into report-facing metadata, dropping the raw bytes.
    pub fn into_source_info(self) -> SourceInfo {
        SourceInfo {
            location: Some(self.location),
            size_bytes: Some(self.size_bytes),
            hash: Some(PayloadHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            }),
        }
    }
}

/// Load the payload bytes for `source`.
pub fn read_source(source: &Source, options: &FetchOptions) -> Result<SourceContext, SourceError> {
    let location = source.to_string();

    let bytes = match source {
        Source::Url(url) => fetch::fetch_url(url, options)?,
        Source::Path(path) => fs::read(path).map_err(|source| SourceError::Io {
            location: location.clone(),
            source,
        })?,
        Source::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|source| SourceError::Io {
                    location: location.clone(),
                    source,
                })?;
            buf
        }
    };

    Ok(SourceContext::from_bytes(location, bytes))
}
