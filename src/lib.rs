pub mod animate;
pub mod clock;
pub mod config;
pub mod error;
pub mod kern;
pub mod log;
pub mod phrase;

// Decoupled game loop architecture
pub mod actors;
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use clock::{ClockSource, Time, WallClock};
pub use error::{Error, Result};
