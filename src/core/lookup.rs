use crate::db::pool::DbPool;
use crate::db::reference;
use crate::errors::AppResult;
use crate::models::{Badge, Department, Employee, Shift};

/// Read-only access to reference data. Every call runs on its own
/// connection and returns `Ok(None)` when no row matches.
#[derive(Debug, Clone)]
pub struct Lookups {
    pool: DbPool,
}

impl Lookups {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn find_badge(&self, id: &str) -> AppResult<Option<Badge>> {
        self.pool.with_conn(|conn| reference::badge_by_id(conn, id))
    }

    pub fn find_department(&self, id: i64) -> AppResult<Option<Department>> {
        self.pool.with_conn(|conn| reference::department_by_id(conn, id))
    }

    pub fn find_department_by_terminal(&self, terminal_id: i64) -> AppResult<Option<Department>> {
        self.pool
            .with_conn(|conn| reference::department_by_terminal(conn, terminal_id))
    }

    pub fn find_shift(&self, id: i64) -> AppResult<Option<Shift>> {
        self.pool.with_conn(|conn| reference::shift_by_id(conn, id))
    }

    pub fn find_shift_for_badge(&self, badge: &Badge) -> AppResult<Option<Shift>> {
        self.pool.with_conn(|conn| reference::shift_by_badge(conn, badge))
    }

    pub fn find_employee(&self, id: i64) -> AppResult<Option<Employee>> {
        self.pool.with_conn(|conn| reference::employee_by_id(conn, id))
    }

    /// Resolves the badge's owner id, then loads it like `find_employee`.
    pub fn find_employee_by_badge(&self, badge: &Badge) -> AppResult<Option<Employee>> {
        self.pool
            .with_conn(|conn| reference::employee_by_badge(conn, badge))
    }
}
