//! Types for the rate endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee and minimum for withdrawing a currency over one network.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithdrawNetwork {
    /// Network identifier (e.g. "TRC20").
    pub network: String,
    /// Withdrawal fee.
    pub fee: Decimal,
    /// Minimum withdrawal amount.
    pub min_withdraw: Decimal,
}

/// Exchange rates for one currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rate {
    /// Currency code.
    pub currency: String,
    /// Display name.
    pub name: String,
    /// Withdrawal networks, in API order.
    #[serde(default)]
    pub withdraw_networks: Vec<WithdrawNetwork>,
    /// Target currency code to conversion rate.
    #[serde(default)]
    pub conversion_rates: HashMap<String, Decimal>,
}

impl Rate {
    /// Conversion rate into `currency`, if listed.
    pub fn rate_to(&self, currency: &str) -> Option<Decimal> {
        self.conversion_rates.get(currency).copied()
    }

    /// Withdrawal terms for `network`, if listed.
    pub fn withdraw_network(&self, network: &str) -> Option<&WithdrawNetwork> {
        self.withdraw_networks.iter().find(|n| n.network == network)
    }
}

/// Body of the rates-in-direction request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RatesInDirectionRequest<'a> {
    pub direction: &'a str,
}
