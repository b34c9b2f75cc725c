//! Copy the unpacked library to its destination.

use crate::artifact::Artifact;
use crate::error::{FetchError, Result};
use std::path::{Path, PathBuf};

/// Copy the artifact's library out of `cache_dir` into `dest_dir`.
///
/// An existing file at the destination is overwritten. Returns the installed
/// path and the number of bytes copied.
pub fn install_library(artifact: &Artifact, cache_dir: &Path, dest_dir: &Path) -> Result<(PathBuf, u64)> {
    let src = cache_dir.join(artifact.library);
    if !src.is_file() {
        return Err(FetchError::MissingLibrary { path: src });
    }

    std::fs::create_dir_all(dest_dir).map_err(|e| FetchError::io(dest_dir, e))?;

    let dest = dest_dir.join(artifact.installed_name);
    let bytes = std::fs::copy(&src, &dest).map_err(|e| FetchError::io(&dest, e))?;
    Ok((dest, bytes))
}
