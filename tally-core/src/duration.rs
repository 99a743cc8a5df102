//! Minute arithmetic over `HH:MM` clock times and normalized durations.

use std::fmt;

/// An elapsed amount of time, normalized so `minutes` is always below 60.
///
/// Values are immutable; arithmetic produces new instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeDuration {
    pub const ZERO: TimeDuration = TimeDuration {
        hours: 0,
        minutes: 0,
    };

    /// Builds a normalized duration from a total minute count.
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn as_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

/// Converts an `HH:MM` clock time into minutes since midnight.
///
/// The caller is expected to hand in text already matched by the line
/// parser's pattern (two digit fields around a colon), so no bounds are
/// checked here. A field that still fails to parse counts as zero; the
/// worst outcome is a wrong annotation, never a failure.
pub fn clock_to_minutes(clock: &str) -> u32 {
    match clock.split_once(':') {
        Some((h, m)) => {
            let hours = h.trim().parse::<u32>().unwrap_or(0);
            let minutes = m.trim().parse::<u32>().unwrap_or(0);
            hours * 60 + minutes
        }
        None => 0,
    }
}

/// Adds two durations, carrying overflowing minutes into hours.
pub fn sum(a: TimeDuration, b: TimeDuration) -> TimeDuration {
    TimeDuration::from_minutes(a.as_minutes() + b.as_minutes())
}

/// Elapsed time between two `HH:MM` clock times, as an absolute magnitude.
///
/// Known limitation: a range whose end precedes its start (reversed input,
/// or an activity crossing midnight) yields the wrong-direction magnitude
/// instead of wrapping around the day.
pub fn diff(t1: &str, t2: &str) -> TimeDuration {
    let m1 = clock_to_minutes(t1);
    let m2 = clock_to_minutes(t2);
    TimeDuration::from_minutes(m1.abs_diff(m2))
}

impl fmt::Display for TimeDuration {
    /// `"5 mins"` below one hour, `"2 h 10 mins"` otherwise.
    ///
    /// This exact wording is part of the inline-label contract; renderers
    /// embed it verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours == 0 {
            write!(f, "{} mins", self.minutes)
        } else {
            write!(f, "{} h {} mins", self.hours, self.minutes)
        }
    }
}
