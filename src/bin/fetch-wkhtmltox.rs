//! fetch-wkhtmltox - install the prebuilt wkhtmltox shared library
//!
//! Usage:
//!   fetch-wkhtmltox linux      Install libwkhtmltox.so
//!   fetch-wkhtmltox windows    Install wkhtmltox.dll
//!   fetch-wkhtmltox macos      Install libwkhtmltox.0.dylib

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wkhtmltox_fetch::{Config, Platform, ToolPolicy, config, output};

#[derive(Parser)]
#[command(name = "fetch-wkhtmltox")]
#[command(about = "Download and install the prebuilt wkhtmltox shared library")]
#[command(version)]
struct Cli {
    /// Target OS: linux, windows, macos
    os: String,

    /// Directory for downloads and unpacked files
    #[arg(long, env = "WKHTMLTOX_CACHE_DIR", default_value = config::DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Directory the library is copied into
    #[arg(long, env = "WKHTMLTOX_DEST", default_value = ".")]
    dest: PathBuf,

    /// Download from this URL instead of the upstream release
    #[arg(long, env = "WKHTMLTOX_URL")]
    url: Option<String>,

    /// HTTP timeout in seconds (no timeout by default)
    #[arg(long, env = "WKHTMLTOX_HTTP_TIMEOUT")]
    timeout: Option<u64>,

    /// Stop at the first extraction tool that fails
    #[arg(long)]
    strict: bool,
}

fn main() {
    if let Err(e) = try_main() {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    // Resolved before anything touches the filesystem or network
    let platform: Platform = cli.os.parse()?;

    let config = Config {
        cache_dir: cli.cache_dir,
        dest_dir: cli.dest,
        url_override: cli.url,
        timeout: None,
        tool_policy: if cli.strict {
            ToolPolicy::Strict
        } else {
            ToolPolicy::Optimistic
        },
    }
    .with_timeout_secs(cli.timeout);

    let installed = wkhtmltox_fetch::run(platform, &config)
        .with_context(|| format!("failed to install wkhtmltox for {}", platform))?;

    output::detail(&format!(
        "installed {} ({} bytes)",
        installed.path.display(),
        installed.bytes
    ));
    Ok(())
}
