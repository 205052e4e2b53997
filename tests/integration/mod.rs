//! Integration test suite for woord.
//!
//! These tests exercise the clock end to end: phrase generation over the
//! whole day, and the typewriter animation played against a real display
//! sink under tokio's paused clock.
//!
//! # Test Categories
//!
//! - `phrases`: Phrase generation across the full (hour, minute) domain
//! - `typing`: Tick-to-display animation sequences and cancellation

mod phrases;
mod typing;
