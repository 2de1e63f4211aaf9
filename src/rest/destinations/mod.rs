//! Destination endpoints and the currency limits lookup.

mod types;

pub use types::*;

use crate::error::YellowChangerError;
use crate::rest::Client;
use crate::rest::endpoints::trades;
use crate::rest::request::Request;

impl Client {
    /// List all pay-in and pay-out destinations with their limits.
    pub async fn destinations_list(&self) -> Result<DestinationsList, YellowChangerError> {
        self.execute_json(&Request::get(trades::DESTINATIONS_LIST)).await
    }

    /// Get the limits for sending (`Side::PayIn`) or withdrawing
    /// (`Side::PayOut`) a currency on a network.
    ///
    /// The destination list is fetched on every call.
    ///
    /// # Errors
    ///
    /// [`YellowChangerError::CurrencyNotFound`] if no destination matches.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yellow_changer::auth::Credentials;
    /// use yellow_changer::rest::{Client, Side};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::builder(Credentials::new("public", "private")).build()?;
    ///     let limits = client.currency_limits("USDT", "TRC20", Side::PayIn).await?;
    ///     println!("{} - {}", limits.min_amount, limits.max_amount);
    ///     Ok(())
    /// }
    /// ```
    pub async fn currency_limits(
        &self,
        currency: &str,
        network: &str,
        side: Side,
    ) -> Result<Limits, YellowChangerError> {
        self.destinations_list()
            .await?
            .require_limits(currency, network, side)
    }
}
