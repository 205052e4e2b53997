//! Wall-clock snapshots.

use chrono::Timelike;

use crate::{Error, Result};

/// An (hour, minute) snapshot of the wall clock. Immutable; re-derived on
/// every tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    hour: u32,
    minute: u32,
}

impl Time {
    /// Build a validated time. Hours outside 0-23 or minutes outside 0-59
    /// are rejected rather than clamped.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Source of time snapshots. The TUI uses [`WallClock`]; tests substitute
/// fixed values.
pub trait ClockSource: Send + Sync + 'static {
    fn now(&self) -> Time;
}

/// System wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl ClockSource for WallClock {
    fn now(&self) -> Time {
        let now = chrono::Local::now();
        // chrono guarantees hour < 24 and minute < 60
        Time {
            hour: now.hour(),
            minute: now.minute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_time() {
        let t = Time::new(23, 59).unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Time::new(24, 0),
            Err(Error::InvalidTime { hour: 24, minute: 0 })
        ));
        assert!(Time::new(0, 60).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Time::new(9, 5).unwrap().to_string(), "9:05");
    }

    #[test]
    fn test_wall_clock_is_valid() {
        let t = WallClock.now();
        assert!(t.hour() <= 23);
        assert!(t.minute() <= 59);
    }
}
