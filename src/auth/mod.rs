//! Authentication module for the YellowChanger API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - HMAC-SHA256 signature generation for requests carrying a body

mod credentials;
mod signature;

pub use credentials::Credentials;
pub use signature::sign_payload;
