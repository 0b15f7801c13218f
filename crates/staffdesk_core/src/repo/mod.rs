//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Mutations addressed by a missing id change nothing and are not errors.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod employee_repo;
