//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, migrations and default category seed
//! - SQLite pragma configuration
//! - Repository implementing the trivia store

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, seed_default_categories};
pub use repo::Repository;
