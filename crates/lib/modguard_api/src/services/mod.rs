//! Request validation and endpoint flows.

pub mod auth;
pub mod moderation;
