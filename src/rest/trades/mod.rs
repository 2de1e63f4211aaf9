//! Trade endpoints.

mod types;

pub use types::*;

use crate::error::YellowChangerError;
use crate::rest::Client;
use crate::rest::endpoints::trades;
use crate::rest::request::Request;

impl Client {
    /// Create a new trade.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yellow_changer::auth::Credentials;
    /// use yellow_changer::rest::Client;
    /// use yellow_changer::rest::trades::CreateTradeRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::builder(Credentials::new("public", "private")).build()?;
    ///     let request = CreateTradeRequest::new("USDT", "TRC20", "BTC", "BTC", "bc1q...")
    ///         .send_value("150".parse()?);
    ///     let trade = client.create_trade(&request).await?;
    ///     println!("pay {} to {:?}", trade.send_value, trade.payment_wallet);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_trade(
        &self,
        request: &CreateTradeRequest,
    ) -> Result<Trade, YellowChangerError> {
        let request = Request::post(trades::CREATE_TRADE).json(request)?;
        self.execute_json(&request).await
    }

    /// Get all information about a trade.
    ///
    /// # Arguments
    ///
    /// * `uniq_id` - Unique id of the trade.
    pub async fn trade_info(&self, uniq_id: &str) -> Result<Trade, YellowChangerError> {
        let request = Request::get(trades::GET_INFO).json(&TradeInfoRequest { uniq_id })?;
        self.execute_json(&request).await
    }
}
