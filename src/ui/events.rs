use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The terminal could not be polled or read. Last event the input
    /// thread sends.
    Error(io::Error),
}

impl AppEvent {
    /// Maps a terminal read to the event the UI loop handles. Focus and
    /// paste events have no use in the game.
    pub fn from_read(read: io::Result<Event>) -> Option<Self> {
        match read {
            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
            Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
            Ok(_) => None,
            Err(err) => Some(AppEvent::Error(err)),
        }
    }
}

/// Reads terminal events on a background thread and hands them to the UI
/// loop one at a time, so every state transition runs on the main thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let app_event = match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => match AppEvent::from_read(event::read()) {
                    Some(app_event) => app_event,
                    None => continue,
                },
                Err(err) => AppEvent::Error(err),
            };
            let failed = matches!(app_event, AppEvent::Error(_));

            // Receiver gone: the UI loop has exited.
            if tx.send(app_event).is_err() || failed {
                break;
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
