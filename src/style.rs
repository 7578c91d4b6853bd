//! Terminal styling helpers.
//!
//! Color adapts to the target stream and honors `NO_COLOR`; on Windows the
//! override is written once at startup and never touched again.

use owo_colors::{OwoColorize, Stream};
use std::io::IsTerminal;

/// Configure color output for the process.
///
/// Called once from `main` before any output is produced.
pub fn init() {
    if cfg!(windows) {
        owo_colors::set_override(false);
        anstream::ColorChoice::Never.write_global();
    }
}

/// Extension trait for the crate's handful of text styles.
pub trait Stylize: std::fmt::Display {
    /// Green, for headlines and confirmations.
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    }

    /// Bold, for titles and other emphasized fragments.
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
    }

    /// Red, for error reports (stderr).
    fn error(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red()).to_string()
    }

    /// Dimmed, for secondary detail.
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Render `text` as an OSC 8 hyperlink to `url` when the terminal supports
/// it, plain otherwise.
pub fn link(text: &str, url: &str) -> String {
    if std::io::stdout().is_terminal() && supports_hyperlinks::supports_hyperlinks() {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}
