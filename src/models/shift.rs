use crate::utils::time::{format_hhmm, minutes_between_wrapping};
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Shift schedule rules, read-only reference data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Shift {
    pub id: i64,
    pub description: String,
    pub shift_start: NaiveTime, // ⇔ shift.shiftstart (TEXT "HH:MM:SS")
    pub shift_stop: NaiveTime,  // ⇔ shift.shiftstop
    pub round_interval: i32,    // minutes
    pub grace_period: i32,      // minutes
    pub dock_penalty: i32,      // minutes
    pub lunch_start: NaiveTime,
    pub lunch_stop: NaiveTime,
    pub lunch_threshold: i32, // minutes worked before lunch is deducted
}

impl Shift {
    /// Length of the shift in minutes. A stop earlier than the start means
    /// the shift runs past midnight.
    pub fn shift_duration(&self) -> i64 {
        minutes_between_wrapping(self.shift_start, self.shift_stop)
    }

    pub fn lunch_duration(&self) -> i64 {
        minutes_between_wrapping(self.lunch_start, self.lunch_stop)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({} minutes); Lunch: {} - {} ({} minutes)",
            self.description,
            format_hhmm(self.shift_start),
            format_hhmm(self.shift_stop),
            self.shift_duration(),
            format_hhmm(self.lunch_start),
            format_hhmm(self.lunch_stop),
            self.lunch_duration(),
        )
    }
}
