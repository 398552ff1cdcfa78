//! # Async Process Bridge
//!
//! Relays a setup run into the UI's message channel.
//!
//! The bridge owns one background thread per run. That thread starts the
//! process through a [`ProcessRunner`], then forwards every event it yields,
//! in order, to a sink supplied by the caller (normally a closure wrapping
//! the event loop's sender). It never touches the application model.
//!
//! Exactly one [`InstallEvent::Done`] reaches the sink per run:
//! - a start failure is reported as `Done(Err(..))`
//! - the runner's own `Done` is forwarded and ends the relay
//! - a runner that drops its channel without `Done` is reported as
//!   [`InstallError::Disconnected`]

use super::runner::{InstallEvent, InstallRequest, ProcessRunner};
use crate::error::InstallError;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::debug;

/// Start a run on a background thread, forwarding its events to `sink`.
pub fn start<F>(runner: Arc<dyn ProcessRunner>, request: InstallRequest, sink: F) -> JoinHandle<()>
where
    F: Fn(InstallEvent) + Send + 'static,
{
    std::thread::spawn(move || {
        let handle = match runner.run(&request) {
            Ok(handle) => handle,
            Err(e) => {
                sink(InstallEvent::Done(Err(e)));
                return;
            }
        };

        let mut forwarded = 0usize;
        loop {
            match handle.next_event() {
                Some(InstallEvent::Done(result)) => {
                    debug!(lines = forwarded, "install relay finished");
                    sink(InstallEvent::Done(result));
                    return;
                }
                Some(event) => {
                    forwarded += 1;
                    sink(event);
                }
                None => {
                    sink(InstallEvent::Done(Err(InstallError::Disconnected)));
                    return;
                }
            }
        }
    })
}
