use super::{badge::Badge, department::Department, shift::Shift};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Employment category, stored as an integer code.
/// Never renumber existing variants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EmployeeType {
    PartTime,
    FullTime,
}

impl EmployeeType {
    /// Convert enum → DB code
    pub fn code(&self) -> i64 {
        match self {
            EmployeeType::PartTime => 0,
            EmployeeType::FullTime => 1,
        }
    }

    /// Convert DB code → enum
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(EmployeeType::PartTime),
            1 => Some(EmployeeType::FullTime),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::PartTime => "Part-Time",
            EmployeeType::FullTime => "Full-Time",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub active: NaiveDateTime, // ⇔ employee.active (TEXT "YYYY-MM-DD HH:MM:SS")
    pub badge: Badge,
    pub department: Department,
    pub shift: Shift,
    pub employee_type: EmployeeType,
}

impl Employee {
    /// "Last, First M" as printed on reports.
    pub fn full_name(&self) -> String {
        match self.middle_name.chars().next() {
            Some(initial) => format!("{}, {} {}", self.last_name, self.first_name, initial),
            None => format!("{}, {}", self.last_name, self.first_name),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID #{}: {} (#{}), Type: {}, Department: {}, Active: {}",
            self.id,
            self.full_name(),
            self.badge.id,
            self.employee_type.label(),
            self.department.description,
            self.active.format("%m/%d/%Y"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_type_codes() {
        assert_eq!(EmployeeType::from_code(0), Some(EmployeeType::PartTime));
        assert_eq!(EmployeeType::from_code(1), Some(EmployeeType::FullTime));
        assert_eq!(EmployeeType::from_code(2), None);
        assert_eq!(EmployeeType::FullTime.code(), 1);
    }
}
