//! # YellowChanger Client
//!
//! An async Rust client library for the YellowChanger exchange REST API.
//!
//! ## Features
//!
//! - Typed bindings for rates, destinations and trades
//! - HMAC-SHA256 request signing
//! - Per-request timeout and cancellation
//! - Client-side wallet address format validation
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yellow_changer::rest::{Client, Options, Side};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Options {
//!         public_key: "public".into(),
//!         private_key: "private".into(),
//!         client_timeout: None,
//!     })?;
//!
//!     let limits = client.currency_limits("USDT", "TRC20", Side::PayIn).await?;
//!     println!("Deposit between {} and {}", limits.min_amount, limits.max_amount);
//!
//!     client.validate_wallet("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL", "TRC20")?;
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod auth;
pub mod error;
pub mod rest;
pub mod serde_helpers;

// Re-export commonly used types at crate root
pub use error::{ApiError, YellowChangerError};
pub use rest::{Client, Options};

// Re-export CancellationToken for convenient access
pub use tokio_util::sync::CancellationToken;

/// Result type alias using YellowChangerError
pub type Result<T> = std::result::Result<T, YellowChangerError>;
