//! Artifact registry
//!
//! One entry per platform: where the wkhtmltox 0.12.6-1 package lives, how it
//! is packaged, where the shared library sits once unpacked, and what the
//! installed copy is called.

use crate::platform::Platform;

/// Upstream release the registry points at.
pub const RELEASE: &str = "0.12.6-1";

const LINUX_URL: &str = "https://github.com/wkhtmltopdf/packaging/releases/download/0.12.6-1/wkhtmltox_0.12.6-1.bionic_amd64.deb";
const WINDOWS_URL: &str = "https://github.com/wkhtmltopdf/packaging/releases/download/0.12.6-1/wkhtmltox-0.12.6-1.msvc2015-win64.exe";
const MACOS_URL: &str = "https://github.com/wkhtmltopdf/packaging/releases/download/0.12.6-1/wkhtmltox-0.12.6-1.macos-cocoa.pkg";

/// Container format of a downloaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packaging {
    /// Debian package, unpacked with `dpkg-deb`
    Deb,
    /// Self-extracting installer, unpacked with `7z`
    SevenZipExe,
    /// Apple installer package, unpacked with `xar` then `tar`
    Pkg,
}

/// Everything needed to go from a platform to an installed library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub platform: Platform,
    pub url: String,
    pub packaging: Packaging,
    /// Library location relative to the cache directory after extraction
    pub library: &'static str,
    /// File name of the installed copy
    pub installed_name: &'static str,
}

impl Artifact {
    pub fn for_platform(platform: Platform) -> Self {
        let (url, packaging, library, installed_name) = match platform {
            Platform::Linux => (
                LINUX_URL,
                Packaging::Deb,
                "usr/local/lib/libwkhtmltox.so",
                "libwkhtmltox.so",
            ),
            Platform::Windows => (
                WINDOWS_URL,
                Packaging::SevenZipExe,
                "wkhtmltox.dll",
                "wkhtmltox.dll",
            ),
            Platform::Macos => (
                MACOS_URL,
                Packaging::Pkg,
                "usr/local/share/wkhtmltox-installer/lib/libwkhtmltox.0.dylib",
                "libwkhtmltox.0.dylib",
            ),
        };

        Self {
            platform,
            url: url.to_string(),
            packaging,
            library,
            installed_name,
        }
    }

    /// Point the artifact at a different URL (a mirror, or a test server).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Name the download is cached under: the last segment of the URL.
    pub fn file_name(&self) -> String {
        file_name_from_url(&self.url)
    }
}

/// Last path segment of a URL, ignoring any query string or fragment.
///
/// Falls back to `download` when there is no usable segment.
pub fn file_name_from_url(url: &str) -> String {
    let clean = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = clean.split_once("://").map_or(clean, |(_, rest)| rest);

    // A bare host has no path segment to name the file after
    if !after_scheme.contains('/') {
        return "download".to_string();
    }

    after_scheme
        .rsplit('/')
        .next()
        .map(sanitize_file_name)
        .unwrap_or_else(|| "download".to_string())
}

/// Replace characters that are not safe in a file name.
fn sanitize_file_name(name: &str) -> String {
    if name.is_empty() || name == "." || name == ".." {
        return "download".to_string();
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = sanitized.trim().trim_matches('.');
    if trimmed.is_empty() {
        "download".to_string()
    } else {
        trimmed.to_string()
    }
}
