//! Messages consumed by the state-update function

use crossterm::event::KeyEvent;

use crate::domain::Snapshot;

/// Everything that can change dashboard state, in arrival order
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard input from the terminal
    Key(KeyEvent),
    /// Terminal was resized
    Resize { width: u16, height: u16 },
    /// A poll loop produced a reading (or a failure)
    Metric(Snapshot),
    /// Terminal input can no longer be read; keys will never arrive again
    InputClosed,
}

impl From<Snapshot> for Message {
    fn from(snapshot: Snapshot) -> Self {
        Message::Metric(snapshot)
    }
}
