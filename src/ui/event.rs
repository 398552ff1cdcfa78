//! # Messages and Producers
//!
//! Every input to the model is a [`Msg`] arriving on one unbounded channel:
//!
//! ```text
//! input reader (blocking task) ──┐
//! ticker (tokio interval)      ──┼──► Msg channel ──► App::update ──► Effect
//! install bridge thread        ──┘
//! ```
//!
//! [`App::update`](super::app::App::update) is the only mutator of the
//! model. It may return an [`Effect`] that the runtime carries out.

use crate::install::{InstallEvent, InstallRequest};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Animation frame interval.
pub const TICK_RATE: Duration = Duration::from_millis(80);

/// How long the input reader waits before checking whether the loop is gone.
const INPUT_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Install(InstallEvent),
}

/// Work requested by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartInstall(InstallRequest),
    /// Save the favorites/alias store.
    PersistStore,
    /// Save the global config (chosen theme).
    PersistConfig,
}

pub type MsgSender = UnboundedSender<Msg>;

/// Trait for reading terminal events (allows dependency injection for testing)
pub trait EventReader: Send {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Map a terminal event to a message. Key releases and focus/paste events
/// are dropped.
pub fn translate(event: &Event) -> Option<Msg> {
    match *event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Msg::Key(key)),
        Event::Mouse(mouse) => Some(Msg::Mouse(mouse)),
        Event::Resize(width, height) => Some(Msg::Resize(width, height)),
        _ => None,
    }
}

/// Read terminal events on a blocking task until the receiver is dropped or
/// reading fails.
pub fn spawn_input<R>(mut reader: R, tx: MsgSender) -> JoinHandle<()>
where
    R: EventReader + 'static,
{
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match reader.read_event(INPUT_POLL) {
                Ok(Some(event)) => {
                    if let Some(msg) = translate(&event) {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("input reader stopped: {:#}", e);
                    break;
                }
            }
        }
        debug!("input reader exited");
    })
}

/// Send [`Msg::Tick`] every `period` until the receiver is dropped.
pub fn spawn_ticker(tx: MsgSender, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Msg::Tick).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use std::collections::VecDeque;

    /// Mock event reader that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            match self.events.pop_front() {
                Some(event) => Ok(Some(event)),
                None => anyhow::bail!("no more events"),
            }
        }
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_translate_drops_releases() {
        let release = key(KeyCode::Enter, KeyEventKind::Release);
        assert!(translate(&release).is_none());
        let press = key(KeyCode::Enter, KeyEventKind::Press);
        assert!(matches!(translate(&press), Some(Msg::Key(_))));
        assert_eq!(translate(&Event::Resize(80, 24)), Some(Msg::Resize(80, 24)));
        assert!(translate(&Event::FocusGained).is_none());
    }

    #[tokio::test]
    async fn test_input_reader_forwards_in_order() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let reader = MockEventReader {
            events: VecDeque::from(vec![
                key(KeyCode::Char('a'), KeyEventKind::Press),
                key(KeyCode::Char('a'), KeyEventKind::Release),
                Event::Resize(100, 30),
            ]),
        };
        spawn_input(reader, tx).await.expect("reader task");

        assert!(matches!(rx.recv().await, Some(Msg::Key(k)) if k.code == KeyCode::Char('a')));
        assert_eq!(rx.recv().await, Some(Msg::Resize(100, 30)));
        // Reader ended and dropped its sender
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_ticker_stops_when_receiver_dropped() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let handle = spawn_ticker(tx, Duration::from_millis(1));
        assert_eq!(rx.recv().await, Some(Msg::Tick));
        drop(rx);
        handle.await.expect("ticker task");
    }
}
