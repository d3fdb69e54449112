use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::client::FetchError;
use crate::light::Light;
use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The one light collection fetch completed.
    LightsFetched(Result<Vec<Light>, FetchError>),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub type AppEventSender = Sender<AppEvent>;

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Channel only. Nothing reads the terminal.
    pub fn channel() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Channel plus a thread forwarding terminal input and ticks.
    pub fn with_terminal_input(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let handler = Self::channel();
        let event_tx = handler.sender();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll timeout to check shutdown flag frequently
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        handler
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}
