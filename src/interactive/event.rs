use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            let event = match event::poll(Duration::from_millis(tick_rate)) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                    _ => None,
                },
                _ => None,
            };
            if sender.send(event.unwrap_or(Event::Tick)).is_err() {
                break;
            }
        });

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Drop keys pressed while an operation was running.
    pub fn drain(&self) {
        while self.receiver.try_recv().is_ok() {}
    }
}
