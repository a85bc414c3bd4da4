//! Request and response shapes exchanged with the endpoint layer.

pub mod response;
pub mod user;
