//! Colored listings
//!
//! Human-oriented listings (types, resources, status lines) are written as
//! lines of styled spans. Generated code and JSON never go through here.
//! `NO_COLOR` and `--color` decide whether styles are rendered.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Role of a span within a listing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Qualified type names and section headings
    Name,
    /// Display names and resource names
    Detail,
    /// Counts and other secondary figures
    Summary,
    /// Completed action, e.g. a written file
    Done,
    /// Nothing to list
    Notice,
    Plain,
}

impl Style {
    fn spec(self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            Style::Name => spec.set_bold(true),
            Style::Detail => spec.set_fg(Some(Color::Cyan)),
            Style::Summary => spec.set_fg(Some(Color::White)).set_dimmed(true),
            Style::Done => spec.set_fg(Some(Color::Green)).set_bold(true),
            Style::Notice => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            Style::Plain => return None,
        };
        Some(spec)
    }
}

/// Line-oriented styled writer
pub struct Listing<W: WriteColor> {
    out: W,
}

impl Listing<StandardStream> {
    /// Listing over stdout
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Listing<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one line made of styled spans
    pub fn line(&mut self, spans: &[(Style, &str)]) -> io::Result<()> {
        for &(style, text) in spans {
            match style.spec() {
                Some(spec) => {
                    self.out.set_color(&spec)?;
                    self.out.write_all(text.as_bytes())?;
                    self.out.reset()?;
                }
                None => self.out.write_all(text.as_bytes())?,
            }
        }
        self.out.write_all(b"\n")
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
