//! # Output Lines
//!
//! Turns raw PTY bytes into display lines.
//!
//! The setup script writes to a pseudo-terminal, so its output arrives as
//! arbitrary byte chunks with `\r\n` line endings, carriage-return progress
//! bars, and ANSI color codes. [`LineSplitter`] reassembles whole lines and
//! [`LineClassifier`] strips escapes and recognizes step markers:
//!
//! ```text
//! ==> Installing fonts          (step)
//! [step] Linking dotfiles        (step)
//! [step 3/7] Configuring tmux    (step, total = 7)
//! cloning into 'tpm'...          (plain)
//! ```

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    /// Advances the progress counter.
    Step,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
    /// Total step count announced by a `[step n/m]` marker.
    pub declared_total: Option<usize>,
}

impl OutputLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Plain,
            text: text.into(),
            declared_total: None,
        }
    }

    pub fn step(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Step,
            text: text.into(),
            declared_total: None,
        }
    }

    pub fn is_step(&self) -> bool {
        self.kind == LineKind::Step
    }
}

/// Reassembles complete lines from byte chunks.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: Vec<u8>,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk, returning every line it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            lines.push(decode_line(&raw[..raw.len() - 1]));
        }
        lines
    }

    /// Flush a trailing line that never got its newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.pending);
        Some(decode_line(&raw))
    }
}

/// Lossy UTF-8 decode keeping only the text after the last carriage return
/// (what a terminal would show after a progress bar redraw).
fn decode_line(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let text = text.trim_end_matches('\r');
    match text.rfind('\r') {
        Some(pos) => text[pos + 1..].to_string(),
        None => text.to_string(),
    }
}

/// Strips terminal escapes and recognizes step markers.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    ansi: Regex,
    arrow_step: Regex,
    bracket_step: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            ansi: Regex::new(
                r"\x1b(?:\[[0-9;?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)|[@-Z\\-_])",
            )?,
            arrow_step: Regex::new(r"^==>\s*(.+)$")?,
            bracket_step: Regex::new(r"^\[step(?:\s+(\d+)\s*/\s*(\d+))?\]\s*(.*)$")?,
        })
    }

    /// Classify a raw line. Returns `None` for lines that are blank once
    /// escapes are removed.
    pub fn classify(&self, raw: &str) -> Option<OutputLine> {
        let clean = self.ansi.replace_all(raw, "");
        let text = clean.trim_end();
        if text.trim().is_empty() {
            return None;
        }

        if let Some(caps) = self.arrow_step.captures(text.trim_start()) {
            return Some(OutputLine::step(caps[1].trim()));
        }

        if let Some(caps) = self.bracket_step.captures(text.trim_start()) {
            let declared_total = caps.get(2).and_then(|m| m.as_str().parse().ok());
            return Some(OutputLine {
                kind: LineKind::Step,
                text: caps[3].trim().to_string(),
                declared_total,
            });
        }

        Some(OutputLine::plain(text))
    }
}
