//! Wall-clock access for bundle timestamps.
//!
//! The fetcher never calls `Local::now()` directly; it asks a [`Clock`], so
//! tests can pin `updated_at` to a known instant.

use chrono::{Local, NaiveDateTime};

/// Timestamp layout written to `updated_at`: local time, microsecond
/// precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// The current time rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The machine's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
