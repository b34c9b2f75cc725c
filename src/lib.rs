//! Fetch the prebuilt wkhtmltox shared library
//!
//! Downloads the upstream wkhtmltox package for a platform, unpacks it with the
//! platform's archive tools and copies the shared library into a destination
//! directory (the working directory by default).
//!
//! # Pipeline
//!
//! 1. Resolve the platform (`linux`, `windows`, `macos`)
//! 2. Lock and create the cache directory (`target/shared_lib/`)
//! 3. Download the package unless it is already cached
//! 4. Unpack it with `dpkg-deb`, `7z`, or `xar` + `tar`
//! 5. Copy the library out of the cache
//!
//! | Platform | Package | Installed as |
//! |----------|---------|--------------|
//! | linux    | `.deb`  | `libwkhtmltox.so` |
//! | windows  | `.exe`  | `wkhtmltox.dll` |
//! | macos    | `.pkg`  | `libwkhtmltox.0.dylib` |
//!
//! # Example
//!
//! ```no_run
//! use wkhtmltox_fetch::{run, Config, Platform};
//!
//! let installed = run(Platform::Linux, &Config::default())?;
//! println!("{}", installed.path.display());
//! # Ok::<(), wkhtmltox_fetch::FetchError>(())
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod install;
pub mod lock;
pub mod output;
pub mod platform;

pub use artifact::{Artifact, Packaging};
pub use config::{Config, ToolPolicy};
pub use error::{FetchError, Result};
pub use extract::Extractor;
pub use fetch::{FetchOutcome, Fetcher};
pub use platform::Platform;

use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub platform: Platform,
    /// Where the library was copied to
    pub path: PathBuf,
    pub bytes: u64,
    /// False when the cached package was reused
    pub downloaded: bool,
}

/// Fetch, unpack and install the library for `platform`.
pub fn run(platform: Platform, config: &Config) -> Result<Installed> {
    let mut artifact = Artifact::for_platform(platform);
    if let Some(url) = &config.url_override {
        artifact = artifact.with_url(url.clone());
    }

    output::action(&format!("Fetching wkhtmltox for {}", platform));

    let fetcher = Fetcher::new(&config.cache_dir).with_timeout(config.timeout);
    fetcher.ensure_cache_dir()?;
    let _lock = lock::lock_cache(fetcher.cache_dir())?;

    let outcome = fetcher.fetch(&artifact)?;
    output::action("Download complete, extracting library...");

    let report = Extractor::new(&config.cache_dir, config.tool_policy)
        .extract(artifact.packaging, outcome.path())?;
    if report.failed > 0 {
        output::warning(&format!(
            "{} extraction step(s) failed, continuing",
            report.failed
        ));
    }

    let (path, bytes) = install::install_library(&artifact, &config.cache_dir, &config.dest_dir)?;
    output::success("Extraction complete!");

    Ok(Installed {
        platform,
        path,
        bytes,
        downloaded: outcome.was_downloaded(),
    })
}
