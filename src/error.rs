// src/error.rs
// =============================================================================
// Typed errors for the grading pipeline.
//
// Every stage (validation, loading, parsing, fetching) returns GradeError so
// the caller can tell the failures apart. main.rs is the only place that
// turns one of these into a process exit.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradeError {
    /// A required local file (HTML or checks) is missing
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The --url value is not a well-formed absolute URL
    #[error("{url} is not a valid URL")]
    InvalidUrl { url: String },

    /// The checks file is not a JSON array of strings
    #[error("{} is not a JSON array of selector strings: {source}", path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A check entry is not a CSS selector we can evaluate
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Passed validation, but we have no way to fetch this scheme
    #[error("cannot fetch {url}: only http, https and file URLs are supported")]
    UnsupportedScheme { url: String },

    /// The HTTP request failed at the transport level
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_path() {
        let err = GradeError::NotFound {
            path: PathBuf::from("missing/index.html"),
        };
        assert_eq!(err.to_string(), "missing/index.html does not exist");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = GradeError::InvalidUrl {
            url: "not-a-url".to_string(),
        };
        assert_eq!(err.to_string(), "not-a-url is not a valid URL");
    }
}
