use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The store invoked the completion callback.
    ConsentRecorded,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal reader. It emits `Tick` whenever no input arrives
    /// within `tick_rate`, and stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || loop {
            let next = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::warn!(error = %e, "Terminal read failed");
                        break;
                    }
                },
                Ok(false) => Some(AppEvent::Tick),
                Err(e) => {
                    tracing::warn!(error = %e, "Terminal poll failed");
                    break;
                }
            };
            if let Some(event) = next {
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });
        Self { rx, tx }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
