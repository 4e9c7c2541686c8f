//! Resolution of `add` sources into banner text. Each source is tried as a
//! local file path first, then as a URL, and finally taken as literal text;
//! the first policy that applies wins.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Error, Result};

/// Timeout for URL fetches. Imports are interactive, so a hung server should
/// fail the one source rather than the whole session.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// How a source argument was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    File,
    Url,
    Literal,
}

/// A resolved source: the text to store plus where it came from, so handlers
/// can phrase their messages.
pub struct Resolved {
    pub text: String,
    pub origin: Origin,
}

/// Create the configured HTTP client shared by one add batch.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("banner-manager/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Whether the argument should be treated as a remote URL.
pub fn looks_like_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Resolve one source argument to banner text.
pub fn resolve(client: &Client, source: &str) -> Result<Resolved> {
    let path = Path::new(source);
    if path.is_file() {
        debug!(source, "resolving source as file");
        let text = fs::read_to_string(path)
            .map_err(|err| Error::Source(format!("could not read file '{source}': {err}")))?;
        return Ok(Resolved {
            text,
            origin: Origin::File,
        });
    }

    if looks_like_url(source) {
        debug!(source, "resolving source as URL");
        let text = fetch_url(client, source)?;
        return Ok(Resolved {
            text,
            origin: Origin::Url,
        });
    }

    Ok(Resolved {
        text: source.to_string(),
        origin: Origin::Literal,
    })
}

/// Fetch a URL and return its body as text.
fn fetch_url(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}
