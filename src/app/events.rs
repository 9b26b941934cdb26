//! Input producer.
//!
//! A single blocking task waits on the terminal backend and forwards every
//! event, in arrival order, into an unbounded channel. The interaction loop
//! is the only consumer and never touches the backend's input side itself.

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// How long one backend wait lasts before the producer checks whether the
/// consumer is still listening.
pub const POLL_WINDOW: Duration = Duration::from_millis(50);

/// Blocking source of terminal events.
pub trait EventSource: Send + 'static {
    /// Waits up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Forwards events from `source` until the receiver is dropped or the
/// backend fails.
pub fn pump<S: EventSource>(mut source: S, tx: UnboundedSender<Event>) {
    while !tx.is_closed() {
        match source.poll(POLL_WINDOW) {
            Ok(false) => continue,
            Ok(true) => match source.read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read terminal event");
                    break;
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to poll terminal events");
                break;
            }
        }
    }
    tracing::debug!("Input pump stopped");
}

/// Owns the producer task and the consuming end of its queue.
pub struct InputPump {
    receiver: UnboundedReceiver<Event>,
    handle: JoinHandle<()>,
}

impl InputPump {
    pub fn spawn() -> Self {
        Self::spawn_with(CrosstermEvents)
    }

    pub fn spawn_with<S: EventSource>(source: S) -> Self {
        let (tx, receiver) = mpsc::unbounded_channel();
        let handle = tokio::task::spawn_blocking(move || pump(source, tx));
        Self { receiver, handle }
    }

    pub fn receiver(&mut self) -> &mut UnboundedReceiver<Event> {
        &mut self.receiver
    }

    /// Drops the receiver and waits for the producer to notice.
    pub async fn shutdown(self) {
        drop(self.receiver);
        if let Err(e) = self.handle.await {
            tracing::warn!(error = %e, "Input pump task failed");
        }
    }
}
