//! Domain model for employee records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own the fixed field order shared by table display and exporters.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `EmployeeId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod employee;
