//! Event handling for the TUI.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A tick event for periodic updates.
    Tick,
}

/// Handles events from the terminal.
pub struct EventHandler {
    /// Sender for events.
    sender: mpsc::UnboundedSender<Event>,
    /// Receiver for events.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a sender for sending events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Start the event loop.
    ///
    /// crossterm polling blocks, so the loop runs on the blocking pool.
    pub fn start(&self) -> EventLoopHandle {
        let sender = self.sender.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stopped = Arc::clone(&stop);
        let handle = tokio::task::spawn_blocking(move || {
            // Nothing animates, so ticks only bound how long a stop request waits.
            let tick_rate = Duration::from_millis(250);

            while !stopped.load(Ordering::Relaxed) {
                if event::poll(tick_rate).unwrap_or(false) {
                    let forwarded = match event::read() {
                        // Windows reports both press and release.
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        Ok(_) => None,
                        Err(e) => {
                            tracing::warn!("Error reading event: {}", e);
                            None
                        }
                    };
                    if let Some(event) = forwarded {
                        if sender.send(event).is_err() {
                            break;
                        }
                    }
                } else if sender.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        EventLoopHandle { handle, stop }
    }

    /// Receive the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the event loop task.
pub struct EventLoopHandle {
    handle: tokio::task::JoinHandle<()>,
    stop: Arc<AtomicBool>,
}

impl EventLoopHandle {
    /// Stop the event loop and wait for it to exit, at most one tick.
    pub async fn shutdown(self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Err(e) = self.handle.await {
            tracing::warn!("Event loop ended abnormally: {}", e);
        }
    }
}

/// Check if a key event is Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
