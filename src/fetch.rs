//! Artifact download into the cache directory
//!
//! A file already present at the cache path counts as downloaded: it is
//! trusted as-is and no request is made. New downloads stream into a `.part`
//! file next to the final path and are renamed into place once complete, so
//! an interrupted transfer is never mistaken for a cached artifact.

use crate::artifact::Artifact;
use crate::error::{FetchError, Result};
use crate::output;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Bytes read from the response per write (and per spinner step)
pub const CHUNK_SIZE: usize = 1024;

/// What [`Fetcher::fetch`] did to produce the cached file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// File was already in the cache; no request was made
    Cached(PathBuf),
    /// File was downloaded just now
    Downloaded { path: PathBuf, bytes: u64 },
}

impl FetchOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Cached(path) => path,
            Self::Downloaded { path, .. } => path,
        }
    }

    pub fn was_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }
}

/// Downloads artifacts into a cache directory.
#[derive(Debug, Clone)]
pub struct Fetcher {
    cache_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Fetcher {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            timeout: None,
        }
    }

    /// Bound the whole request. Without this the transport defaults apply.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Path the artifact is cached under.
    pub fn cached_path(&self, artifact: &Artifact) -> PathBuf {
        self.cache_dir.join(artifact.file_name())
    }

    /// Create the cache directory (and parents) if missing.
    pub fn ensure_cache_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|e| FetchError::io(&self.cache_dir, e))
    }

    /// Make sure the artifact is in the cache, downloading it if absent.
    pub fn fetch(&self, artifact: &Artifact) -> Result<FetchOutcome> {
        self.ensure_cache_dir()?;

        let dest = self.cached_path(artifact);
        if dest.is_file() {
            output::skip("File already exists, skipping download");
            return Ok(FetchOutcome::Cached(dest));
        }

        let bytes = self.download(&artifact.url, &dest)?;
        Ok(FetchOutcome::Downloaded { path: dest, bytes })
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut request = ureq::get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(status, _) => FetchError::UnexpectedStatus {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(t) => FetchError::Http {
                url: url.to_string(),
                message: t.to_string(),
            },
        })?;

        // Anything but a plain 200 (e.g. 204 or 206) is not the full artifact
        if response.status() != 200 {
            return Err(FetchError::UnexpectedStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        output::detail(&format!("Saving as {}", dest.display()));

        let part = part_path(dest);
        let result = stream_to_file(response.into_reader(), &part);
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = std::fs::remove_file(&part);
                return Err(e);
            }
        };

        std::fs::rename(&part, dest).map_err(|e| FetchError::io(dest, e))?;
        Ok(bytes)
    }
}

/// Sibling path the body is streamed into before the final rename.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

/// Copy `reader` into a new file at `path`, one chunk at a time.
fn stream_to_file(mut reader: impl Read, path: &Path) -> Result<u64> {
    let mut file = File::create(path).map_err(|e| FetchError::io(path, e))?;
    let pb = output::download_spinner("downloading");

    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                pb.finish_and_clear();
                return Err(FetchError::io(path, e));
            }
        };

        if let Err(e) = file.write_all(&buffer[..bytes_read]) {
            pb.finish_and_clear();
            return Err(FetchError::io(path, e));
        }

        total_bytes += bytes_read as u64;
        pb.set_position(total_bytes);
        pb.tick();
    }

    pb.finish_and_clear();
    file.flush().map_err(|e| FetchError::io(path, e))?;
    Ok(total_bytes)
}
