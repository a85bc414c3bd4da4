//! Domain aggregates exposed by the user service layer.

pub mod types;
pub mod user;
