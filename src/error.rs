//! Error types for the fetch pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a fetch/extract/install run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("OS must be one of 'linux', 'windows', 'macos' (got '{0}')")]
    InvalidPlatform(String),

    #[error("Received unexpected response code {status}\n  url: {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("download failed: {message}\n  url: {url}")]
    Http { url: String, message: String },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed with exit code: {code:?}\n  in: {dir}")]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        dir: PathBuf,
    },

    #[error("{tool} failed to start: {source}")]
    ToolMissing {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("library not found at {path} (did extraction succeed?)")]
    MissingLibrary { path: PathBuf },

    #[error(
        "cache {path} is in use by another process. If this is incorrect, delete '{path}'"
    )]
    CacheLocked { path: PathBuf },
}

impl FetchError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_platform_message_lists_choices() {
        let msg = FetchError::InvalidPlatform("beos".into()).to_string();
        assert!(msg.starts_with("OS must be one of 'linux', 'windows', 'macos'"));
        assert!(msg.contains("beos"));
    }

    #[test]
    fn test_unexpected_status_message() {
        let msg = FetchError::UnexpectedStatus {
            status: 404,
            url: "http://example.com/x.deb".into(),
        }
        .to_string();
        assert!(msg.contains("Received unexpected response code 404"));
    }

    #[test]
    fn test_io_keeps_path() {
        let err = FetchError::io(
            "/nope",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "/nope: gone");
    }
}
