//! Request handlers.

pub mod auth;
pub mod moderate;
pub mod protected;
