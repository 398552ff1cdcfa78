use super::output::OutputLine;
use crate::error::InstallError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of output lines retained for display.
pub const OUTPUT_BUFFER_LINES: usize = 20;

/// State of a single run of the setup script.
#[derive(Debug, Clone)]
pub struct InstallSession {
    running: bool,
    finished: bool,
    lines: VecDeque<OutputLine>,
    capacity: usize,
    steps_done: usize,
    total_steps: Option<usize>,
    current_step: Option<String>,
    last_error: Option<InstallError>,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl Default for InstallSession {
    fn default() -> Self {
        Self::with_capacity(OUTPUT_BUFFER_LINES)
    }
}

impl InstallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            running: false,
            finished: false,
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            steps_done: 0,
            total_steps: None,
            current_step: None,
            last_error: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Reset and mark the session running. Returns `false` without touching
    /// anything when a run is already in progress.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        *self = Self::with_capacity(self.capacity);
        self.running = true;
        self.started_at = Some(Instant::now());
        true
    }

    /// Record an output line. Ignored unless a run is in progress.
    pub fn push_line(&mut self, line: OutputLine) {
        if !self.running {
            return;
        }
        if line.is_step() {
            self.steps_done += 1;
            if let Some(total) = line.declared_total {
                self.total_steps = Some(total);
            }
            self.current_step = Some(line.text.clone());
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Record the terminal result of the run.
    pub fn finish(&mut self, result: Result<(), InstallError>) {
        self.running = false;
        self.finished = true;
        self.finished_at = Some(Instant::now());
        self.last_error = result.err();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn succeeded(&self) -> bool {
        self.finished && self.last_error.is_none()
    }

    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    pub fn total_steps(&self) -> Option<usize> {
        self.total_steps
    }

    pub fn current_step(&self) -> Option<&str> {
        self.current_step.as_deref()
    }

    pub fn last_error(&self) -> Option<&InstallError> {
        self.last_error.as_ref()
    }

    /// Completion ratio when the script announced a total, clamped to 1.0.
    pub fn progress_ratio(&self) -> Option<f64> {
        match self.total_steps {
            Some(total) if total > 0 => Some((self.steps_done as f64 / total as f64).min(1.0)),
            _ => None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut session = InstallSession::new();
        assert!(session.start());
        session.push_line(OutputLine::plain("one"));

        assert!(!session.start());
        assert!(session.is_running());
        assert_eq!(session.line_count(), 1);
    }

    #[test]
    fn test_buffer_keeps_last_lines_in_order() {
        let mut session = InstallSession::with_capacity(20);
        session.start();
        for i in 1..=25 {
            session.push_line(OutputLine::plain(i.to_string()));
        }

        let texts: Vec<String> = session.lines().map(|l| l.text.clone()).collect();
        let expected: Vec<String> = (6..=25).map(|i| i.to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_steps_advance_progress() {
        let mut session = InstallSession::new();
        session.start();
        session.push_line(OutputLine::plain("noise"));
        session.push_line(OutputLine {
            declared_total: Some(4),
            ..OutputLine::step("Linking")
        });
        session.push_line(OutputLine::step("Fonts"));

        assert_eq!(session.steps_done(), 2);
        assert_eq!(session.total_steps(), Some(4));
        assert_eq!(session.current_step(), Some("Fonts"));
        assert_eq!(session.progress_ratio(), Some(0.5));
    }

    #[test]
    fn test_finish_records_error_and_allows_restart() {
        let mut session = InstallSession::new();
        session.start();
        session.push_line(OutputLine::plain("boom"));
        session.finish(Err(InstallError::ExitCode(2)));

        assert!(!session.is_running());
        assert!(session.is_finished());
        assert!(!session.succeeded());
        assert_eq!(session.last_error(), Some(&InstallError::ExitCode(2)));

        assert!(session.start());
        assert_eq!(session.line_count(), 0);
        assert!(session.last_error().is_none());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_lines_ignored_when_idle() {
        let mut session = InstallSession::new();
        session.push_line(OutputLine::plain("stray"));
        assert_eq!(session.line_count(), 0);
    }
}
