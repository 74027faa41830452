//! Terminal rendering of markdown output.
//!
//! Rich mode styles headers and inline markup through termimad; plain mode
//! writes the markdown untouched, which keeps output stable for scripts and
//! tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Writes markdown to stdout, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())
                .context("Failed to write output")?;
            return out.flush().context("Failed to write output");
        }

        for line in markdown.lines() {
            // Headers keep their hashes so book IDs stay easy to spot.
            let written = if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")
            } else {
                writeln!(out, "{}", self.skin.inline(line))
            };
            written.context("Failed to write output")?;
        }
        out.flush().context("Failed to write output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
