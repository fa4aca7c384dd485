//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer, providing the
//! concrete PostgreSQL persistence behind the repository traits.

pub mod persistence;
