//! Outbound adapters implementing the driven repository ports.
//!
//! - **memory**: process-local store for development and tests
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//!
//! Adapters translate between domain records and their storage
//! representation. They contain no booking or review rules.

pub mod memory;
pub mod persistence;
