//! # modguard_core
//!
//! Core domain logic for Modguard.

pub mod auth;
pub mod classifier;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
