//! Navigation targets and status sinks.
//!
//! These stand in for the page the link builder used to live on: a
//! `StatusSink` is the status element, a `Navigator` is the browser's
//! location.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::Command;
use url::Url;

/// Receives the status text shown to the user. Each call replaces the previous text.
pub trait StatusSink {
    fn set_text(&mut self, text: &str);
}

/// In-memory status, mostly for embedding and tests.
impl StatusSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Writes each status text as one line to a writer (e.g. stderr).
pub struct WriterStatus<W: Write>(pub W);

impl<W: Write> StatusSink for WriterStatus<W> {
    fn set_text(&mut self, text: &str) {
        // Status display is best effort, like assigning textContent.
        if let Err(e) = writeln!(self.0, "{text}") {
            tracing::warn!("failed to write status: {}", e);
        }
    }
}

/// Takes the user to a URL. Fire-and-forget: nothing about the remote
/// response is reported back.
pub trait Navigator {
    fn navigate(&mut self, url: &Url) -> Result<()>;
}

/// Prints the URL as a single line.
pub struct PrintNavigator<W: Write>(pub W);

impl<W: Write> Navigator for PrintNavigator<W> {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        writeln!(self.0, "{url}").context("write link")?;
        self.0.flush().context("flush link")?;
        Ok(())
    }
}

/// Default opener program on Linux desktops.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Hands the URL to an external opener program (`xdg-open` by default),
/// which opens it in the user's browser.
#[derive(Debug, Clone)]
pub struct OpenerNavigator {
    program: String,
}

impl OpenerNavigator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Navigator for OpenerNavigator {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        tracing::debug!("launching opener {}", self.program);
        let status = Command::new(&self.program)
            .arg(url.as_str())
            .status()
            .with_context(|| format!("launch opener {:?}", self.program))?;
        if !status.success() {
            bail!("opener {:?} exited with {}", self.program, status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_status_replaces_text() {
        let mut s = String::from("old");
        s.set_text("new");
        assert_eq!(s, "new");
    }

    #[test]
    fn writer_status_writes_one_line() {
        let mut out = WriterStatus(Vec::new());
        out.set_text("hello");
        assert_eq!(out.0, b"hello\n");
    }

    #[test]
    fn print_navigator_writes_url_line() {
        let url = Url::parse("https://example.com/secure_download?appid=1").unwrap();
        let mut nav = PrintNavigator(Vec::new());
        nav.navigate(&url).unwrap();
        assert_eq!(
            String::from_utf8(nav.0).unwrap(),
            "https://example.com/secure_download?appid=1\n"
        );
    }

    #[test]
    fn opener_missing_program_is_error() {
        let url = Url::parse("https://example.com/").unwrap();
        let mut nav = OpenerNavigator::new("manilink-no-such-opener-program");
        assert!(nav.navigate(&url).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_status_is_checked() {
        let url = Url::parse("https://example.com/").unwrap();
        assert!(OpenerNavigator::new("true").navigate(&url).is_ok());
        assert!(OpenerNavigator::new("false").navigate(&url).is_err());
    }
}
