use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    /// Clock terminal bound to this department; the authorization anchor
    /// for punches of its employees.
    pub terminal_id: i64,
    pub description: String,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} ({}), Terminal ID: {}",
            self.id, self.description, self.terminal_id
        )
    }
}
