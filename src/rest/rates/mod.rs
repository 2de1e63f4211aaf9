//! Rate endpoints.

mod types;

pub use types::*;

use crate::error::YellowChangerError;
use crate::rest::Client;
use crate::rest::endpoints::trades;
use crate::rest::request::Request;

impl Client {
    /// List all exchange rates.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yellow_changer::auth::Credentials;
    /// use yellow_changer::rest::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::builder(Credentials::new("public", "private")).build()?;
    ///     for rate in client.all_rates().await? {
    ///         println!("{} ({}): {:?}", rate.currency, rate.name, rate.rate_to("USDT"));
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn all_rates(&self) -> Result<Vec<Rate>, YellowChangerError> {
        self.execute_json(&Request::get(trades::ALL_RATES)).await
    }

    /// Get the rate for one direction.
    ///
    /// # Arguments
    ///
    /// * `direction` - Currency code whose rates to fetch (e.g. "USDT").
    pub async fn rates_in_direction(&self, direction: &str) -> Result<Rate, YellowChangerError> {
        let request =
            Request::get(trades::RATES_IN_DIRECTION).json(&RatesInDirectionRequest { direction })?;
        self.execute_json(&request).await
    }
}
