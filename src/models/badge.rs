use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Physical credential identifying an employee to a terminal.
///
/// A badge is identified by `id` alone: equality and hashing ignore the
/// description.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: String,          // ⇔ badge.id (TEXT, e.g. "28DC3FB8")
    pub description: String, // ⇔ badge.description
}

impl Badge {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for Badge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Badge {}

impl Hash for Badge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_description() {
        let stored = Badge::new("08D01475", "Chapman, Joshua E");
        let typed = Badge::new("08D01475", "");

        assert_eq!(stored, typed);
        assert_ne!(stored, Badge::new("D2C39273", "Chapman, Joshua E"));

        let set: HashSet<Badge> = [stored, typed].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
