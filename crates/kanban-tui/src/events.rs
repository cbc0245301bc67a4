use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Forwards terminal input over a channel from a background task.
///
/// The first event is always a `Resize` carrying the terminal size at
/// startup, so the first frame after it can lay out the board.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        match crossterm::terminal::size() {
            Ok((width, height)) => {
                let _ = tx.send(Event::Resize(width, height));
            }
            Err(e) => tracing::warn!("could not read terminal size: {}", e),
        }

        tokio::spawn(async move {
            let mut idle = Duration::ZERO;
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        let forwarded = if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    Some(Event::Resize(width, height))
                                }
                                Ok(_) => None,
                                Err(e) => {
                                    tracing::warn!("terminal read failed: {}", e);
                                    None
                                }
                            }
                        } else {
                            idle += Duration::from_millis(16);
                            if idle >= tick_rate {
                                idle = Duration::ZERO;
                                Some(Event::Tick)
                            } else {
                                None
                            }
                        };

                        if let Some(event) = forwarded {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
            tracing::debug!("event handler stopped");
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
