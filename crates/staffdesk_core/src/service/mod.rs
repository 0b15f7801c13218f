//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and exporters into use-case level APIs.
//! - Keep CLI/UI callers decoupled from storage details.

pub mod employee_service;
pub mod summary;
