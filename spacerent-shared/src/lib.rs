//! # SpaceRent Shared Library
//!
//! This crate contains the domain models and database layer shared by the
//! SpaceRent API server and its tooling.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool, migrations, and demo data seeding
//! - `auth`: Password hashing utilities

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the SpaceRent shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
