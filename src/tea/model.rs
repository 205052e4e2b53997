//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime
//! infrastructure. The shared display string is the one exception: the typist
//! actor writes it, the model only snapshots it.

use crate::animate::TermDisplay;
use crate::clock::Time;
use crate::config::Config;
use crate::render::{next_version, RenderState};

/// Pure application state - the single source of truth.
pub struct Model {
    /// Shared display surface; also handed to typist actors.
    pub display: TermDisplay,
    /// The phrase the display is animating toward (last animation target).
    pub target_phrase: Option<String>,
    /// Last time reported by the ticker, shown on the help line.
    pub last_time: Option<Time>,

    // UI toggle state
    /// Whether the help line is expanded (toggled by '?')
    pub show_help: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            display: TermDisplay::new(),
            target_phrase: None,
            last_time: None,
            show_help: false,
            dirty: true,
            config,
        }
    }

    /// Create an immutable snapshot for the render thread.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            display: self.display.raw(),
            time: self.last_time,
            show_help: self.show_help,
        }
    }
}
