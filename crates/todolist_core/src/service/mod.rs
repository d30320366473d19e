//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into transport-independent operations.
//! - Keep HTTP concerns out of the core crate.

pub mod todo_service;
