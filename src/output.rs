//! Console output
//!
//! Status lines go to stdout, warnings and errors to stderr, all styled with
//! owo-colors. The download spinner is an indicatif bar on stderr.
//!
//! The spinner advances one glyph per 1024-byte chunk, but indicatif caps how
//! often it repaints (see [`SPINNER_REFRESH_HZ`]), so on a fast link several
//! steps can land between two frames. It is hidden entirely when stderr is not
//! a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;

/// Spinner glyphs, advanced once per downloaded chunk
pub const SPINNER_GLYPHS: [&str; 4] = ["-", "/", "|", "\\"];

/// Repaint ceiling for the spinner; indicatif's default is 20
pub const SPINNER_REFRESH_HZ: u8 = 120;

/// `==> message`, the start of a run
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// `==> message`, a step that was not needed
pub fn skip(message: &str) {
    println!("{} {}", "==>".dimmed(), message.dimmed());
}

/// `==> message`, the run finished
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Indented secondary line: commands, paths, sizes
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}

/// Spinner for a download of unknown length.
///
/// Never ticks on its own: the caller calls [`ProgressBar::tick`] once per
/// chunk, so the glyph only moves while bytes arrive.
pub fn download_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(
        None,
        ProgressDrawTarget::stderr_with_hz(SPINNER_REFRESH_HZ),
    );
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("     {spinner:.cyan} {msg} {bytes}")
            .unwrap()
            // last entry is the finished frame
            .tick_strings(&[
                SPINNER_GLYPHS[0],
                SPINNER_GLYPHS[1],
                SPINNER_GLYPHS[2],
                SPINNER_GLYPHS[3],
                " ",
            ]),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_glyph_order() {
        assert_eq!(SPINNER_GLYPHS.concat(), "-/|\\");
    }

    #[test]
    fn test_refresh_above_indicatif_default() {
        assert!(SPINNER_REFRESH_HZ > 20);
    }

    #[test]
    fn test_download_spinner_tracks_chunks() {
        let pb = download_spinner("downloading");
        for i in 1..=8 {
            pb.set_position(i * 1024);
            pb.tick();
        }
        assert_eq!(pb.position(), 8 * 1024);
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
