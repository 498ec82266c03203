pub mod config;
pub mod ledger;
pub mod lookup;

pub use ledger::{ADMIN_TERMINAL, NOT_CREATED, PunchLedger};
pub use lookup::Lookups;
