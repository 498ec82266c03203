//! ANSI color helper utilities for terminal output.
use crate::models::EventType;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_event(et: EventType) -> &'static str {
    match et {
        EventType::ClockIn => GREEN,
        EventType::ClockOut => RED,
        EventType::TimeOut => YELLOW,
    }
}

pub fn colorize_event(et: EventType) -> String {
    format!("{}{}{}", color_for_event(et), et.label(), RESET)
}
