//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Styling shortcuts that respect terminal color support
pub trait Stylize {
    /// Highlighted value (names, commands, URLs)
    fn accent(&self) -> String;
    /// De-emphasized helper text
    fn muted(&self) -> String;
    /// Headings
    fn emphasis(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
    }

    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    }

    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    "✓".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

/// Red cross
pub fn cross() -> String {
    "✗".if_supports_color(Stream::Stderr, |t| t.red()).to_string()
}

/// Spinner used while a request is in flight
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// `text` as a clickable link when the terminal supports it
pub fn link(text: &str, url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        format!("{text} ({url})")
    }
}
