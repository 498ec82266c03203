use serde::Serialize;
use std::fmt;

/// Kind of a recorded punch.
///
/// Stored as an integer code. The code table below is the storage contract:
/// never renumber existing variants, only append new ones.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EventType {
    ClockOut,
    ClockIn,
    TimeOut,
}

impl EventType {
    /// Code of the event type allowed to spill over a day boundary
    /// (see `PunchLedger::list_for_day`).
    pub const DAY_CLOSING_CODE: i64 = 0;

    /// Convert enum → DB code
    pub fn code(&self) -> i64 {
        match self {
            EventType::ClockOut => 0,
            EventType::ClockIn => 1,
            EventType::TimeOut => 2,
        }
    }

    /// Convert DB code → enum
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(EventType::ClockOut),
            1 => Some(EventType::ClockIn),
            2 => Some(EventType::TimeOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::ClockOut => "CLOCK OUT",
            EventType::ClockIn => "CLOCK IN",
            EventType::TimeOut => "TIME OUT",
        }
    }

    /// Parse user input: accepts `in`, `clock-in`, `clock_in`, `CLOCK IN`, ...
    pub fn et_from_str(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match norm.as_str() {
            "in" | "clockin" => Some(Self::ClockIn),
            "out" | "clockout" => Some(Self::ClockOut),
            "timeout" => Some(Self::TimeOut),
            _ => None,
        }
    }

    pub fn is_day_closing(&self) -> bool {
        self.code() == Self::DAY_CLOSING_CODE
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
