//! Cache directory lock
//!
//! Two runs against the same cache would write the same download file, so a
//! run holds an exclusive lock on `<cache>/.fetch.lock` until it finishes.
//! The lock file itself is left in place; only the `fs2` lock on it matters,
//! and the OS drops that lock when the holding process exits.

use crate::error::{FetchError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = ".fetch.lock";

/// Take the cache lock without waiting. The cache directory must exist.
pub fn lock_cache(cache_dir: &Path) -> Result<CacheLock> {
    let path = cache_dir.join(LOCK_FILE);

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)
        .map_err(|e| FetchError::io(&path, e))?;

    if file.try_lock_exclusive().is_err() {
        return Err(FetchError::CacheLocked { path });
    }

    Ok(CacheLock { file, path })
}

/// Held for the duration of a run; unlocks on drop.
#[derive(Debug)]
pub struct CacheLock {
    file: File,
    path: PathBuf,
}

impl CacheLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
