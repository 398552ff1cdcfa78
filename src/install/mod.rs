//! # Install Module
//!
//! Everything between "the user confirmed installation" and "the setup
//! script exited".
//!
//! ## Components
//!
//! - [`runner`] - the process-runner collaborator ([`ProcessRunner`]) and its
//!   PTY implementation ([`PtyRunner`])
//! - [`output`] - splitting PTY bytes into lines and spotting step markers
//! - [`session`] - the [`InstallSession`] record kept in the app model
//! - [`bridge`] - the background relay from a running process into the
//!   event loop's message channel
//!
//! ## Concurrency
//!
//! ```text
//!  PTY reader thread ──┐
//!                      ├─► ProcessHandle ─► bridge thread ─► UI channel ─► App::update
//!  child waiter thread ┘
//! ```
//!
//! Only `App::update` writes the [`InstallSession`]. Background threads
//! produce messages and nothing else. There is no timeout and no
//! cancellation: a hung script keeps the install screen waiting until the
//! user force-quits with Ctrl+C.

pub mod bridge;
pub mod output;
pub mod runner;
pub mod session;

pub use output::{LineKind, OutputLine};
pub use runner::{InstallEvent, InstallRequest, ProcessHandle, ProcessRunner, PtyRunner};
pub use session::{InstallSession, OUTPUT_BUFFER_LINES};
