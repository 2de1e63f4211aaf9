//! YellowChanger REST API client.
//!
//! [`Client::execute`] is the transport core: one signed HTTP call per
//! invocation, with the response classified into a raw success body or an
//! [`ApiError`](crate::error::ApiError). The endpoint bindings in
//! [`rates`], [`destinations`] and [`trades`] build a [`Request`], call it and
//! decode the result.
//!
//! # Trait-based API
//!
//! The [`YellowChangerApi`] trait abstracts the endpoint operations, enabling
//! mock implementations for testing.

mod client;
pub mod destinations;
mod endpoints;
pub mod rates;
mod request;
pub mod trades;
mod traits;

pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT, Options};
pub use destinations::{DestinationsList, Limits, Side};
pub use endpoints::{API_KEY_HEADER, SIGNATURE_HEADER, YELLOWCHANGER_BASE_URL};
pub use rates::Rate;
pub use request::{Payload, Request};
pub use trades::{CreateTradeRequest, SbpBank, Trade, TradeStatus};
pub use traits::YellowChangerApi;
