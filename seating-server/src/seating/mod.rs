//! SeatingManager - table, reservation and arrival lifecycle
//!
//! Every mutating operation follows the same flow:
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate input (no store access)
//!     ├─ 2. Begin write scope (gate + transaction)
//!     ├─ 3. Look up rows, check uniqueness / capacity
//!     ├─ 4. Write
//!     └─ 5. Commit (any early return drops the scope → rollback)
//! ```
//!
//! Reads go through a read transaction and never take the write gate.

pub mod capacity;
mod error;

mod arrivals;
mod occupancy;
mod reservations;
mod tables;

pub use error::{SeatingError, SeatingErrorKind, SeatingResult};

use crate::db::DbService;

/// Seating engine over the shared store
#[derive(Clone)]
pub struct SeatingManager {
    db: DbService,
}

impl std::fmt::Debug for SeatingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingManager")
            .field("db", &"<DbService>")
            .finish()
    }
}

impl SeatingManager {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DbService {
        &self.db
    }
}
