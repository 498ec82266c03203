use super::{badge::Badge, event_type::EventType};
use chrono::{NaiveDateTime, SubsecRound};
use serde::Serialize;
use std::fmt;

/// A single clock event recorded by a terminal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Punch {
    pub id: i64,                          // ⇔ event.id (0 = not persisted)
    pub terminal_id: i64,                 // ⇔ event.terminalid
    pub badge: Badge,                     // ⇔ event.badgeid → badge
    pub original_timestamp: NaiveDateTime, // ⇔ event.timestamp (second precision)
    pub event_type: EventType,            // ⇔ event.eventtypeid (code)
}

impl Punch {
    /// Build a punch that has not been stored yet.
    /// Sub-second precision is dropped, matching what the store keeps.
    pub fn new(
        terminal_id: i64,
        badge: Badge,
        timestamp: NaiveDateTime,
        event_type: EventType,
    ) -> Self {
        Self {
            id: 0,
            terminal_id,
            badge,
            original_timestamp: timestamp.trunc_subsecs(0),
            event_type,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// `#28DC3FB8 CLOCK IN: FRI 09/07/2018 06:50:35`
    pub fn print_original(&self) -> String {
        format!(
            "#{} {}: {}",
            self.badge.id,
            self.event_type,
            self.original_timestamp
                .format("%a %m/%d/%Y %H:%M:%S")
                .to_string()
                .to_uppercase()
        )
    }
}

impl fmt::Display for Punch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_original())
    }
}
