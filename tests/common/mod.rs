//! Shared helpers for the integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the built CLI binary
pub fn fetch_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fetch-wkhtmltox"))
}

/// Run the CLI with `cwd` as its working directory.
pub fn run_cli(cwd: &std::path::Path, args: &[&str]) -> Output {
    Command::new(fetch_bin())
        .args(args)
        .current_dir(cwd)
        .env_remove("WKHTMLTOX_CACHE_DIR")
        .env_remove("WKHTMLTOX_DEST")
        .env_remove("WKHTMLTOX_URL")
        .env_remove("WKHTMLTOX_HTTP_TIMEOUT")
        .output()
        .expect("Failed to execute fetch-wkhtmltox")
}

/// Whether `tool` can be started from PATH.
pub fn has_tool(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Run the CLI with `bin_dir` searched first on PATH.
pub fn run_cli_with_tools(cwd: &std::path::Path, bin_dir: &std::path::Path, args: &[&str]) -> Output {
    let path = std::env::var_os("PATH").unwrap_or_default();
    let mut dirs = vec![bin_dir.to_path_buf()];
    dirs.extend(std::env::split_paths(&path));

    Command::new(fetch_bin())
        .args(args)
        .current_dir(cwd)
        .env("PATH", std::env::join_paths(dirs).unwrap())
        .env_remove("WKHTMLTOX_CACHE_DIR")
        .env_remove("WKHTMLTOX_DEST")
        .env_remove("WKHTMLTOX_URL")
        .env_remove("WKHTMLTOX_HTTP_TIMEOUT")
        .output()
        .expect("Failed to execute fetch-wkhtmltox")
}

/// Write an executable shell script named `name` into `bin_dir`.
#[cfg(unix)]
pub fn install_fake_tool(bin_dir: &std::path::Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin_dir).unwrap();
    let path = bin_dir.join(name);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}
