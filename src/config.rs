//! Run configuration

use std::path::PathBuf;
use std::time::Duration;

/// Cache directory used when none is configured, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = "target/shared_lib";

/// Bounds applied to a configured HTTP timeout, in seconds
pub const MIN_TIMEOUT_SECS: u64 = 5;
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Tool exit-code handling for the extraction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPolicy {
    /// Warn on a failed tool and keep going; a missing library shows up at copy time
    #[default]
    Optimistic,
    /// Abort on the first tool that fails or cannot be started
    Strict,
}

/// Where things go and how the download behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Replaces the registry URL for the selected platform
    pub url_override: Option<String>,
    /// `None` leaves the transport defaults in place
    pub timeout: Option<Duration>,
    pub tool_policy: ToolPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            dest_dir: PathBuf::from("."),
            url_override: None,
            timeout: None,
            tool_policy: ToolPolicy::default(),
        }
    }
}

impl Config {
    /// Set the HTTP timeout in seconds, clamped to a sane range.
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(|s| Duration::from_secs(s.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)));
        self
    }
}
