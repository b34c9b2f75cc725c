//! Platform-specific unpacking
//!
//! Each packaging format maps to a fixed list of external tool invocations.
//! Every invocation carries its own working directory (relative to the cache
//! directory), so the process working directory is never changed.
//!
//! Tools are run directly, not through a shell. Output is streamed to the
//! terminal.

use crate::artifact::Packaging;
use crate::config::ToolPolicy;
use crate::error::{FetchError, Result};
use crate::output;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Where the macOS installer keeps its nested tarball
const MACOS_INSTALLER_DIR: &str = "usr/local/share/wkhtmltox-installer";

/// One external tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStep {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory, relative to the cache directory
    pub dir: PathBuf,
}

impl ToolStep {
    fn new(program: &str, args: &[&str], dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            dir: dir.into(),
        }
    }

    /// Human-readable command line, for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Tool invocations that unpack `archive` (a file name inside the cache directory).
pub fn plan(packaging: Packaging, archive: &str) -> Vec<ToolStep> {
    match packaging {
        Packaging::Deb => vec![ToolStep::new("dpkg-deb", &["-x", archive, "."], "")],
        // -aoa: stdin is closed, so an overwrite prompt would fail the re-run
        Packaging::SevenZipExe => vec![ToolStep::new("7z", &["e", "-aoa", archive], "")],
        Packaging::Pkg => vec![
            ToolStep::new("xar", &["-xf", archive], ""),
            ToolStep::new("tar", &["-xzf", "Payload"], ""),
            ToolStep::new("tar", &["-xzf", "wkhtmltox.tar.gz"], MACOS_INSTALLER_DIR),
        ],
    }
}

/// Summary of an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs extraction plans inside a cache directory.
#[derive(Debug, Clone)]
pub struct Extractor {
    cache_dir: PathBuf,
    policy: ToolPolicy,
}

impl Extractor {
    pub fn new(cache_dir: impl Into<PathBuf>, policy: ToolPolicy) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            policy,
        }
    }

    /// Unpack a cached archive according to its packaging.
    pub fn extract(&self, packaging: Packaging, archive: &Path) -> Result<ExtractReport> {
        let name = archive
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        self.run_steps(&plan(packaging, &name))
    }

    /// Run steps in order.
    ///
    /// Under [`ToolPolicy::Optimistic`] a failing step is reported and
    /// skipped; under [`ToolPolicy::Strict`] it ends the run with an error.
    pub fn run_steps(&self, steps: &[ToolStep]) -> Result<ExtractReport> {
        let mut report = ExtractReport::default();

        for step in steps {
            match self.run_step(step) {
                Ok(()) => report.succeeded += 1,
                Err(e) if self.policy == ToolPolicy::Optimistic => {
                    output::warning(&e.to_string());
                    report.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    fn run_step(&self, step: &ToolStep) -> Result<()> {
        let dir = self.cache_dir.join(&step.dir);
        if !dir.is_dir() {
            return Err(FetchError::io(
                &dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "working directory missing"),
            ));
        }

        output::detail(&step.command_line());

        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| FetchError::ToolMissing {
                tool: step.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FetchError::ToolFailed {
                tool: step.program.clone(),
                code: status.code(),
                dir,
            });
        }

        Ok(())
    }
}
