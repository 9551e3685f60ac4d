// src/source/remote.rs
// =============================================================================
// This module validates --url values and fetches remote HTML.
//
// Key functionality:
// - Checks the URL against a conservative pattern before any network I/O
// - Makes exactly one GET request (no retries, no redirects followed)
// - Reads the body chunk by chunk until the response is complete
// - Reports transport failures as GradeError::Network
//
// Rust concepts:
// - async/await: The fetch is the only place the pipeline suspends
// - Streams: The response body arrives as a stream of byte chunks
// - OnceLock: Compile the regex once, on first use
// =============================================================================

use std::sync::OnceLock;
use std::time::Duration;

use futures::StreamExt; // StreamExt gives us .next() on the body stream
use regex::Regex;
use reqwest::{redirect, Client};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{GradeError, Result};

// Allow-listed scheme, "://", then an authority made of URI characters,
// ending where the path, query or fragment starts (or at the end). What
// comes after the authority is left to Url::parse.
const URL_PATTERN: &str =
    r"^(https?|ftp|file)://[-A-Za-z0-9._~%!$&'()*+,;=:@\[\]]*(?:[/?#]|$)";

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a constant, so failing to compile it is a programmer error
    PATTERN.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

// Validates a --url value
//
// Parameters:
//   raw: the string from the command line
//
// Returns: the parsed Url, or InvalidUrl if it doesn't look like an
// absolute http/https/ftp/file URL
pub fn validate_url(raw: &str) -> Result<Url> {
    let invalid = || GradeError::InvalidUrl {
        url: raw.to_string(),
    };

    // Url::parse would quietly percent-encode these, hiding a typo
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    if !url_pattern().is_match(raw) {
        return Err(invalid());
    }

    // The pattern accepts things like "http://:::" that aren't real URLs
    let url = Url::parse(raw).map_err(|_| invalid())?;
    if url.scheme() != "file" && url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    Ok(url)
}

// Fetches a page with a single GET and returns its body as text
//
// Parameters:
//   url: an http or https URL (already validated)
//   timeout: upper bound for the whole request, body included
//
// Non-2xx responses are logged but still returned: a 404 page is still
// HTML that can be graded.
pub async fn fetch_url(url: &Url, timeout: Duration) -> Result<String> {
    let network = |source| GradeError::Network {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()
        .map_err(network)?;

    let response = client.get(url.clone()).send().await.map_err(network)?;

    let status = response.status();
    info!("STATUS: {}", status.as_u16());
    info!("HEADERS: {:?}", response.headers());
    if !status.is_success() {
        warn!("{} answered with HTTP {}, grading the body anyway", url, status);
    }

    // Buffer every chunk; the parser only ever sees the complete document
    let mut body = Vec::new();
    let mut chunks = response.bytes_stream();
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(network)?;
        debug!("BODY: {} byte chunk", chunk.len());
        body.extend_from_slice(&chunk);
    }

    debug!("fetched {} bytes from {}", body.len(), url);

    Ok(String::from_utf8_lossy(&body).into_owned())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a regex AND Url::parse?
//    - The regex is the quick "does this even look like a URL" gate
//    - Url::parse is the real parser; it catches things the regex lets
//      through, like "http://:::" with no host
//
// 2. What is bytes_stream()?
//    - reqwest hands us the body as a Stream of Bytes chunks
//    - StreamExt::next() waits for the next chunk (or None at the end)
//    - We copy every chunk into one Vec<u8> before parsing
//
// 3. Why decode with from_utf8_lossy at the end?
//    - A multi-byte character can be split across two chunks
//    - Decoding the full buffer once avoids garbling it
//
// 4. Why is the closure passed to map_err several times?
//    - `network` only borrows `url`, so it is Copy
//    - Each map_err gets its own copy
// -----------------------------------------------------------------------------
