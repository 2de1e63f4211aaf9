//! Trait definition for the YellowChanger REST API client.
//!
//! The `YellowChangerApi` trait abstracts the endpoint operations so callers
//! can depend on it and swap in mock implementations in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use yellow_changer::rest::{Side, YellowChangerApi};
//!
//! async fn min_deposit<C: YellowChangerApi>(client: &C) -> Result<(), yellow_changer::YellowChangerError> {
//!     let limits = client.currency_limits("USDT", "TRC20", Side::PayIn).await?;
//!     println!("min deposit: {}", limits.min_amount);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::YellowChangerError;
use crate::rest::destinations::{DestinationsList, Limits, Side};
use crate::rest::rates::Rate;
use crate::rest::trades::{CreateTradeRequest, Trade};

/// Trait defining the YellowChanger REST API operations.
///
/// All methods are async and return `Result<T, YellowChangerError>`.
pub trait YellowChangerApi: Send + Sync {
    /// List all exchange rates.
    fn all_rates(&self) -> impl Future<Output = Result<Vec<Rate>, YellowChangerError>> + Send;

    /// Get the rate for one direction.
    fn rates_in_direction(
        &self,
        direction: &str,
    ) -> impl Future<Output = Result<Rate, YellowChangerError>> + Send;

    /// List pay-in and pay-out destinations.
    fn destinations_list(
        &self,
    ) -> impl Future<Output = Result<DestinationsList, YellowChangerError>> + Send;

    /// Look up the limits for a currency on a network.
    ///
    /// Fetches the destination list on every call and returns the first
    /// match, or [`YellowChangerError::CurrencyNotFound`].
    fn currency_limits(
        &self,
        currency: &str,
        network: &str,
        side: Side,
    ) -> impl Future<Output = Result<Limits, YellowChangerError>> + Send {
        async move {
            let destinations = self.destinations_list().await?;
            destinations.require_limits(currency, network, side)
        }
    }

    /// Create a trade.
    fn create_trade(
        &self,
        request: &CreateTradeRequest,
    ) -> impl Future<Output = Result<Trade, YellowChangerError>> + Send;

    /// Get trade info by unique id.
    fn trade_info(
        &self,
        uniq_id: &str,
    ) -> impl Future<Output = Result<Trade, YellowChangerError>> + Send;
}
