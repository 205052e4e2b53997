//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from external
//! sources like keyboard events or background actors.

use crossterm::event::KeyEvent;

use crate::clock::Time;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // From background actors
    /// The ticker read the wall clock.
    Tick(Time),
    /// The typist wrote a keystroke to the display.
    DisplayChanged,
}
