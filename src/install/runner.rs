//! # PTY-based Setup Runner
//!
//! Runs the dotfiles setup script inside a pseudo-terminal so it behaves as
//! it would in an interactive shell (line-buffered output, colors), and
//! streams its output back as [`InstallEvent`]s.
//!
//! ## Architecture
//!
//! - `portable-pty` spawns the interpreter with the script path as argument
//! - A reader thread splits PTY bytes into lines and sends them in order
//! - A waiter thread waits for the child, joins the reader, then sends the
//!   single terminal [`InstallEvent::Done`]
//!
//! Joining the reader before sending `Done` guarantees that every output line
//! of a run is delivered before its completion.

use super::output::{LineClassifier, LineSplitter, OutputLine};
use crate::catalog::NavStyle;
use crate::error::InstallError;
use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{debug, info, warn};

/// PTY geometry used for the setup script.
const PTY_ROWS: u16 = 40;
const PTY_COLS: u16 = 120;

/// What the user chose in the wizard, handed to the setup script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub theme: String,
    pub nav_style: NavStyle,
    pub deep_dive: bool,
    /// Deep-dive option values as `(key, value)` pairs, e.g. `("shell.default", "zsh")`.
    pub options: Vec<(String, String)>,
}

impl InstallRequest {
    /// Environment variables describing the request.
    pub fn env(&self) -> Vec<(String, String)> {
        let mut env = vec![
            ("DOTWIZ_THEME".to_string(), self.theme.clone()),
            ("DOTWIZ_NAV_STYLE".to_string(), self.nav_style.id().to_string()),
            (
                "DOTWIZ_DEEP_DIVE".to_string(),
                if self.deep_dive { "1" } else { "0" }.to_string(),
            ),
        ];
        if self.deep_dive {
            env.extend(
                self.options
                    .iter()
                    .map(|(key, value)| (option_env_name(key), value.clone())),
            );
        }
        env
    }
}

/// `shell.default` -> `DOTWIZ_OPT_SHELL_DEFAULT`
fn option_env_name(key: &str) -> String {
    let upper: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("DOTWIZ_OPT_{}", upper)
}

/// A notification from a running setup process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    Output(OutputLine),
    Done(Result<(), InstallError>),
}

/// Sending half used by runner implementations.
pub type EventSender = mpsc::Sender<InstallEvent>;

/// Receiving half of a run: zero or more `Output` events followed by one
/// `Done`.
#[derive(Debug)]
pub struct ProcessHandle {
    events: mpsc::Receiver<InstallEvent>,
}

impl ProcessHandle {
    /// Create a connected sender/handle pair.
    pub fn channel() -> (EventSender, ProcessHandle) {
        let (tx, rx) = mpsc::channel();
        (tx, ProcessHandle { events: rx })
    }

    /// Block until the next event. `None` once the run's senders are gone.
    pub fn next_event(&self) -> Option<InstallEvent> {
        self.events.recv().ok()
    }
}

/// The process-runner collaborator.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, request: &InstallRequest) -> Result<ProcessHandle, InstallError>;
}

/// Runs `<shell> <script>` in a PTY.
#[derive(Debug, Clone)]
pub struct PtyRunner {
    shell: String,
    script: PathBuf,
}

impl PtyRunner {
    pub fn new(shell: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            script: script.into(),
        }
    }

    fn build_command(&self, request: &InstallRequest) -> Result<CommandBuilder, InstallError> {
        if !self.script.is_file() {
            return Err(InstallError::ScriptNotFound(self.script.clone()));
        }

        let mut cmd = CommandBuilder::new(&self.shell);
        cmd.arg(&self.script);
        if let Some(dir) = self.script.parent() {
            cmd.cwd(dir);
        }
        for (key, value) in request.env() {
            cmd.env(key, value);
        }
        Ok(cmd)
    }
}

impl ProcessRunner for PtyRunner {
    fn run(&self, request: &InstallRequest) -> Result<ProcessHandle, InstallError> {
        let cmd = self.build_command(request)?;
        let classifier = LineClassifier::new().map_err(|e| InstallError::Spawn(e.to_string()))?;

        let pty_pair = NativePtySystem::default()
            .openpty(PtySize {
                rows: PTY_ROWS,
                cols: PTY_COLS,
                pixel_width: 0,
                pixel_height: 0,
            })
            .map_err(|e| InstallError::Spawn(format!("failed to open PTY: {}", e)))?;

        let mut child = pty_pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| InstallError::Spawn(e.to_string()))?;

        // Drop the slave side so the reader sees EOF once the child exits
        drop(pty_pair.slave);

        let mut reader = pty_pair
            .master
            .try_clone_reader()
            .map_err(|e| InstallError::Stream(e.to_string()))?;
        let master = pty_pair.master;

        info!(script = %self.script.display(), shell = %self.shell, "setup script started");

        let (tx, handle) = ProcessHandle::channel();

        let line_tx = tx.clone();
        let reader_thread = std::thread::spawn(move || {
            let mut splitter = LineSplitter::new();
            let mut buf = [0u8; 4096];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        for raw in splitter.push(&buf[..n]) {
                            if let Some(line) = classifier.classify(&raw) {
                                let _ = line_tx.send(InstallEvent::Output(line));
                            }
                        }
                    }
                    // Linux reports EIO on the master once the slave is closed
                    Err(e) => {
                        debug!("PTY read ended: {}", e);
                        break;
                    }
                }
            }
            if let Some(line) = splitter.finish().and_then(|raw| classifier.classify(&raw)) {
                let _ = line_tx.send(InstallEvent::Output(line));
            }
        });

        std::thread::spawn(move || {
            let status = child.wait();
            let reader_result = reader_thread.join();
            drop(master);

            let result = match (status, reader_result) {
                (_, Err(_)) => Err(InstallError::Stream("output reader panicked".to_string())),
                (Err(e), _) => Err(InstallError::Stream(e.to_string())),
                (Ok(status), Ok(())) if status.success() => Ok(()),
                (Ok(status), Ok(())) => {
                    Err(InstallError::ExitCode(status.exit_code().try_into().unwrap_or(1)))
                }
            };
            match &result {
                Ok(()) => info!("setup script finished"),
                Err(e) => warn!("setup script failed: {}", e),
            }
            let _ = tx.send(InstallEvent::Done(result));
        });

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(deep_dive: bool) -> InstallRequest {
        InstallRequest {
            theme: "nord".to_string(),
            nav_style: NavStyle::Emacs,
            deep_dive,
            options: vec![("shell.default".to_string(), "fish".to_string())],
        }
    }

    fn has(env: &[(String, String)], name: &str, value: &str) -> bool {
        env.iter().any(|(k, v)| k == name && v == value)
    }

    #[test]
    fn test_env_without_deep_dive_skips_options() {
        let env = request(false).env();
        assert!(has(&env, "DOTWIZ_THEME", "nord"));
        assert!(has(&env, "DOTWIZ_NAV_STYLE", "emacs"));
        assert!(has(&env, "DOTWIZ_DEEP_DIVE", "0"));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_env_with_deep_dive_includes_options() {
        let env = request(true).env();
        assert!(has(&env, "DOTWIZ_DEEP_DIVE", "1"));
        assert!(has(&env, "DOTWIZ_OPT_SHELL_DEFAULT", "fish"));
    }

    #[test]
    fn test_option_env_name() {
        let name = option_env_name("git.pull-rebase");
        assert_eq!(name, "DOTWIZ_OPT_GIT_PULL_REBASE");
    }

    #[test]
    fn test_missing_script_is_reported() {
        let runner = PtyRunner::new("bash", "/nonexistent/dotfiles/install.sh");
        let err = runner.run(&request(false)).unwrap_err();
        assert_eq!(
            err,
            InstallError::ScriptNotFound(PathBuf::from("/nonexistent/dotfiles/install.sh"))
        );
    }

    #[test]
    fn test_handle_channel_delivers_in_order() {
        let (tx, handle) = ProcessHandle::channel();
        let line = InstallEvent::Output(OutputLine::plain("a"));
        tx.send(line).unwrap();
        tx.send(InstallEvent::Done(Ok(()))).unwrap();
        drop(tx);

        assert_eq!(
            handle.next_event(),
            Some(InstallEvent::Output(OutputLine::plain("a")))
        );
        assert_eq!(handle.next_event(), Some(InstallEvent::Done(Ok(()))));
        assert_eq!(handle.next_event(), None);
    }
}
