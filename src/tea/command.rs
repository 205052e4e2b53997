//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side
//! effects to be executed by the runtime.

/// Output commands from the update function.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Retype the display into a new phrase (cancels any running retype).
    Animate { target: String },

    // App lifecycle
    Quit,
}
