//! Database models backing the user repository.

pub mod config;
pub mod user;
