//! Domain entities: reference data (badge, department, shift, employee)
//! and the punch record.

pub mod badge;
pub mod department;
pub mod employee;
pub mod event_type;
pub mod punch;
pub mod shift;

pub use badge::Badge;
pub use department::Department;
pub use employee::{Employee, EmployeeType};
pub use event_type::EventType;
pub use punch::Punch;
pub use shift::Shift;
