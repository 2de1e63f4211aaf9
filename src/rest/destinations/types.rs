//! Types for the destination endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::YellowChangerError;

/// Which way funds flow relative to the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Customer to exchange.
    PayIn,
    /// Exchange to customer.
    PayOut,
}

impl From<bool> for Side {
    /// `true` is pay-in, `false` is pay-out.
    fn from(pay_in: bool) -> Self {
        if pay_in { Side::PayIn } else { Side::PayOut }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::PayIn => f.write_str("payin"),
            Side::PayOut => f.write_str("payout"),
        }
    }
}

/// Minimum and maximum amount for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Limits {
    /// Minimum amount.
    pub min_amount: Decimal,
    /// Maximum amount.
    pub max_amount: Decimal,
}

impl Limits {
    /// Create limits from a minimum and maximum.
    pub fn new(min_amount: Decimal, max_amount: Decimal) -> Self {
        Self {
            min_amount,
            max_amount,
        }
    }

    /// Whether `amount` lies within `[min_amount, max_amount]`.
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

/// Commission charged on a pay-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Commission {
    /// Fee amount.
    pub fee_amount: Decimal,
}

/// A currency/network the exchange accepts funds on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayInDestination {
    /// Currency code.
    pub currency: String,
    /// Network identifier.
    pub network: String,
    /// Accepted amounts.
    pub limit: Limits,
}

/// A currency/network the exchange sends funds on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayOutDestination {
    /// Currency code.
    pub currency: String,
    /// Network identifier.
    pub network: String,
    /// Accepted amounts.
    pub limit: Limits,
    /// Commission charged.
    #[serde(default)]
    pub commission: Commission,
}

/// All pay-in and pay-out destinations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DestinationsList {
    /// Pay-in destinations.
    #[serde(rename = "payin", default)]
    pub pay_in: Vec<PayInDestination>,
    /// Pay-out destinations.
    #[serde(rename = "payout", default)]
    pub pay_out: Vec<PayOutDestination>,
}

impl DestinationsList {
    /// Limits of the first destination matching `currency` and `network` on `side`.
    pub fn limits(&self, currency: &str, network: &str, side: Side) -> Option<&Limits> {
        match side {
            Side::PayIn => self
                .pay_in
                .iter()
                .find(|d| d.currency == currency && d.network == network)
                .map(|d| &d.limit),
            Side::PayOut => self
                .pay_out
                .iter()
                .find(|d| d.currency == currency && d.network == network)
                .map(|d| &d.limit),
        }
    }

    /// Like [`limits`](Self::limits), failing with
    /// [`YellowChangerError::CurrencyNotFound`] when nothing matches.
    pub fn require_limits(
        &self,
        currency: &str,
        network: &str,
        side: Side,
    ) -> Result<Limits, YellowChangerError> {
        self.limits(currency, network, side)
            .copied()
            .ok_or_else(|| YellowChangerError::CurrencyNotFound {
                currency: currency.to_string(),
                network: network.to_string(),
                side,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn sample() -> DestinationsList {
        let json = r#"{
            "payin": [
                {"currency": "BTC", "network": "BTC", "limit": {"min_amount": 0.001, "max_amount": 10}},
                {"currency": "USDT", "network": "TRC20", "limit": {"min_amount": 10, "max_amount": 100000}},
                {"currency": "USDT", "network": "TRC20", "limit": {"min_amount": 99, "max_amount": 99}}
            ],
            "payout": [
                {"currency": "BTC", "network": "BTC", "limit": {"min_amount": 0.002, "max_amount": 5},
                 "commission": {"fee_amount": 0.0001}}
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_side_from_bool() {
        assert_eq!(Side::from(true), Side::PayIn);
        assert_eq!(Side::from(false), Side::PayOut);
    }

    #[test]
    fn test_deserialize_destinations() {
        let list = sample();
        assert_eq!(list.pay_in.len(), 3);
        assert_eq!(list.pay_out.len(), 1);
        assert_eq!(list.pay_out[0].commission.fee_amount, dec("0.0001"));
    }

    #[test]
    fn test_limits_by_side() {
        let list = sample();
        assert_eq!(
            list.limits("BTC", "BTC", Side::PayIn),
            Some(&Limits::new(dec("0.001"), dec("10")))
        );
        assert_eq!(
            list.limits("BTC", "BTC", Side::PayOut),
            Some(&Limits::new(dec("0.002"), dec("5")))
        );
    }

    #[test]
    fn test_limits_first_match_wins() {
        let list = sample();
        let limits = list.limits("USDT", "TRC20", Side::PayIn).unwrap();
        assert_eq!(limits.min_amount, dec("10"));
    }

    #[test]
    fn test_limits_network_must_match() {
        let list = sample();
        assert!(list.limits("USDT", "ERC20", Side::PayIn).is_none());
        assert!(list.limits("USDT", "TRC20", Side::PayOut).is_none());
    }

    #[test]
    fn test_require_limits_not_found() {
        let err = sample()
            .require_limits("ETH", "ERC20", Side::PayOut)
            .unwrap_err();
        assert!(matches!(
            err,
            YellowChangerError::CurrencyNotFound { side: Side::PayOut, .. }
        ));
        assert_eq!(err.to_string(), "currency not found: ETH on ERC20 (payout)");
    }

    #[test]
    fn test_limits_contains() {
        let limits = Limits::new(dec("0.001"), dec("10"));
        assert!(limits.contains(dec("0.001")));
        assert!(limits.contains(dec("10")));
        assert!(!limits.contains(dec("10.01")));
        assert!(!limits.contains(dec("0")));
    }

    #[test]
    fn test_empty_list() {
        let list: DestinationsList = serde_json::from_str("{}").unwrap();
        assert!(list.limits("BTC", "BTC", Side::PayIn).is_none());
    }
}
