//! Injectable time source
//!
//! Image filenames, chart titles and commit messages all read the same clock,
//! so a pinned clock makes every generated name predictable.

use chrono::{NaiveDateTime, Utc};

use crate::consts::PINNED_TIMESTAMP_FORMAT;
use crate::error::AppError;
use crate::utils::Timezone;

pub(crate) trait Clock {
    /// Current wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock, expressed in the configured timezone
#[derive(Debug, Clone, Copy)]
pub(crate) struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub(crate) fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.timezone.to_naive_local(Utc::now())
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl FixedClock {
    /// Parse a `YYYY-MM-DDTHH:MM:SS` (or space separated) timestamp
    pub(crate) fn parse(s: &str) -> Result<Self, AppError> {
        let trimmed = s.trim();
        NaiveDateTime::parse_from_str(trimmed, PINNED_TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
            .map(FixedClock)
            .map_err(|_| AppError::InvalidTimestamp {
                input: s.to_string(),
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_parses_t_separator() {
        let clock = FixedClock::parse("2026-02-06T10:15:30").unwrap();
        assert_eq!(
            clock.now().format("%Y%m%d_%H%M%S").to_string(),
            "20260206_101530"
        );
    }

    #[test]
    fn fixed_clock_parses_space_separator() {
        let clock = FixedClock::parse(" 2026-02-06 10:15:30 ").unwrap();
        assert_eq!(clock.now(), FixedClock::parse("2026-02-06T10:15:30").unwrap().now());
    }

    #[test]
    fn fixed_clock_rejects_garbage() {
        let err = FixedClock::parse("20260206").unwrap_err();
        assert!(err.to_string().contains("20260206"));
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::parse("2026-02-06T10:15:30").unwrap();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new(Timezone::Named(chrono_tz::UTC));
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
