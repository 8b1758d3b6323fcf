// inputs/handler.rs

//! Event handler that wraps crossterm input and tick events.

use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEventKind};

use super::key::Key;

pub enum Event {
    /// An input event occurred.
    Input(Key),
    /// A tick event occurred.
    Tick,
}

/// Event handler that wraps crossterm input and tick events.
/// Key presses are captured in a dedicated thread and returned to a
/// common `Receiver`.
pub struct EventHandler {
    rx: Receiver<Event>,
    // Need to be kept around to prevent disposing the sender side.
    _tx: Sender<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs a new instance with the given `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let event_stop_capture = stop_capture.clone();
        thread::spawn(move || loop {
            // poll for tick rate duration, if no event, send a tick event.
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(event::Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                        Some(Event::Input(Key::from(key_event)))
                    }
                    Ok(_) => None,
                    Err(err) => {
                        error!("Could not read terminal event: {}", err);
                        break;
                    }
                },
                Ok(false) => Some(Event::Tick),
                Err(err) => {
                    error!("Could not poll terminal events: {}", err);
                    break;
                }
            };
            if let Some(event) = event {
                if event_tx.send(event).is_err() {
                    // main thread is gone
                    break;
                }
            }
            if event_stop_capture.load(Ordering::Relaxed) {
                break;
            }
        });

        EventHandler {
            rx,
            _tx: tx,
            stop_capture,
        }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Event {
        self.rx.recv().unwrap_or(Event::Tick)
    }

    /// Stop the capture thread.
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}
