//! YellowChanger REST API endpoint constants.

/// Base URL for the YellowChanger REST API.
pub const YELLOWCHANGER_BASE_URL: &str = "https://api.yellowchanger.com";

/// Header carrying the public key on every request.
pub const API_KEY_HEADER: &str = "Y_API_KEY";

/// Header carrying the hex HMAC-SHA256 of the request body.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Trade endpoints.
pub mod trades {
    /// List all exchange rates.
    pub const ALL_RATES: &str = "/trades/allRates";
    /// Rates in one direction.
    pub const RATES_IN_DIRECTION: &str = "/trades/ratesInDirection";
    /// Pay-in and pay-out destinations with limits.
    pub const DESTINATIONS_LIST: &str = "/trades/destinationsList";
    /// Create a trade.
    pub const CREATE_TRADE: &str = "/trades/createTrade";
    /// Get trade info by unique id.
    pub const GET_INFO: &str = "/trades/getInfo";
}
