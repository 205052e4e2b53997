//! Immutable render snapshots handed from the logic thread to the renderer.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::Time;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// Raw display text, kerning markers included.
    pub display: String,
    /// Last wall-clock reading, for the help line.
    pub time: Option<Time>,
    /// Whether the help line is expanded (toggled by '?')
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            display: String::new(),
            time: None,
            show_help: false,
        }
    }
}
