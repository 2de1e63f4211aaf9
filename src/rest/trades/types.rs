//! Types for the trade endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Network name that requires [`SbpBank`] on trade creation.
pub const SBP_NETWORK: &str = "SBPRUB";

/// Bank for a transfer over SBP (the Russian instant-payment rail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SbpBank {
    #[serde(rename = "sbppsb")]
    Psb,
    #[serde(rename = "sbpakbars")]
    AkBars,
    #[serde(rename = "sbprnkb")]
    Rnkb,
    #[serde(rename = "sbpotp")]
    Otp,
    #[serde(rename = "sbpozon")]
    Ozon,
    #[serde(rename = "sbpmtc")]
    Mts,
    #[serde(rename = "sbppochtabank")]
    PochtaBank,
    #[serde(rename = "sbpumoney")]
    UMoney,
    #[serde(rename = "sbptinkoff")]
    Tinkoff,
    #[serde(rename = "sbpsber")]
    Sber,
    #[serde(rename = "sbpraif")]
    Raiffeisen,
    #[serde(rename = "sbpalfa")]
    Alfa,
    #[serde(rename = "sbpotkritie")]
    Otkritie,
    #[serde(rename = "sbpvtb")]
    Vtb,
    #[serde(rename = "sbpsovkombank")]
    Sovkombank,
    #[serde(rename = "sbpgazprom")]
    Gazprom,
    #[serde(rename = "sbprosbank")]
    Rosbank,
}

impl SbpBank {
    /// Every accepted bank.
    pub const ALL: [SbpBank; 17] = [
        SbpBank::Psb,
        SbpBank::AkBars,
        SbpBank::Rnkb,
        SbpBank::Otp,
        SbpBank::Ozon,
        SbpBank::Mts,
        SbpBank::PochtaBank,
        SbpBank::UMoney,
        SbpBank::Tinkoff,
        SbpBank::Sber,
        SbpBank::Raiffeisen,
        SbpBank::Alfa,
        SbpBank::Otkritie,
        SbpBank::Vtb,
        SbpBank::Sovkombank,
        SbpBank::Gazprom,
        SbpBank::Rosbank,
    ];

    /// Wire value of the bank code.
    pub fn as_str(&self) -> &'static str {
        match self {
            SbpBank::Psb => "sbppsb",
            SbpBank::AkBars => "sbpakbars",
            SbpBank::Rnkb => "sbprnkb",
            SbpBank::Otp => "sbpotp",
            SbpBank::Ozon => "sbpozon",
            SbpBank::Mts => "sbpmtc",
            SbpBank::PochtaBank => "sbppochtabank",
            SbpBank::UMoney => "sbpumoney",
            SbpBank::Tinkoff => "sbptinkoff",
            SbpBank::Sber => "sbpsber",
            SbpBank::Raiffeisen => "sbpraif",
            SbpBank::Alfa => "sbpalfa",
            SbpBank::Otkritie => "sbpotkritie",
            SbpBank::Vtb => "sbpvtb",
            SbpBank::Sovkombank => "sbpsovkombank",
            SbpBank::Gazprom => "sbpgazprom",
            SbpBank::Rosbank => "sbprosbank",
        }
    }
}

impl std::fmt::Display for SbpBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the create-trade request.
///
/// Leaving `get_name`, `get_network` and `get_creds` empty credits the
/// funds to the site balance; see [`CreateTradeRequest::to_balance`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTradeRequest {
    /// Currency being sent.
    pub send_name: String,
    /// Currency being received.
    pub get_name: String,
    /// Network of the currency being sent.
    pub send_network: String,
    /// Network of the currency being received.
    pub get_network: String,
    /// Amount you will pay.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub send_value: Option<Decimal>,
    /// Amount you will receive.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub get_value: Option<Decimal>,
    /// Receiving credentials: address, card or phone number.
    pub get_creds: String,
    /// Caller-chosen unique id of the trade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniq_id: Option<String>,
    /// SBP bank, only when `get_network` is `SBPRUB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbp_bank: Option<SbpBank>,
}

impl CreateTradeRequest {
    /// Create a trade sending one currency and receiving another at `get_creds`.
    pub fn new(
        send_name: impl Into<String>,
        send_network: impl Into<String>,
        get_name: impl Into<String>,
        get_network: impl Into<String>,
        get_creds: impl Into<String>,
    ) -> Self {
        Self {
            send_name: send_name.into(),
            get_name: get_name.into(),
            send_network: send_network.into(),
            get_network: get_network.into(),
            send_value: None,
            get_value: None,
            get_creds: get_creds.into(),
            uniq_id: None,
            sbp_bank: None,
        }
    }

    /// Create a trade whose proceeds are credited to the site balance.
    pub fn to_balance(send_name: impl Into<String>, send_network: impl Into<String>) -> Self {
        Self::new(send_name, send_network, "", "", "")
    }

    /// Set the amount to pay.
    pub fn send_value(mut self, value: Decimal) -> Self {
        self.send_value = Some(value);
        self
    }

    /// Set the amount to receive.
    pub fn get_value(mut self, value: Decimal) -> Self {
        self.get_value = Some(value);
        self
    }

    /// Set the unique id of the trade.
    pub fn uniq_id(mut self, uniq_id: impl Into<String>) -> Self {
        self.uniq_id = Some(uniq_id.into());
        self
    }

    /// Set the SBP bank.
    pub fn sbp_bank(mut self, bank: SbpBank) -> Self {
        self.sbp_bank = Some(bank);
        self
    }

    /// Whether the proceeds go to the site balance.
    pub fn is_to_balance(&self) -> bool {
        self.get_name.is_empty() && self.get_network.is_empty() && self.get_creds.is_empty()
    }
}

/// Body of the trade-info request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TradeInfoRequest<'a> {
    pub uniq_id: &'a str,
}

/// Lifecycle state of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum TradeStatus {
    /// 1: waiting for payment from the customer.
    AwaitingPayment,
    /// 2: waiting for network confirmations.
    AwaitingConfirmations,
    /// 3: sent by the exchange.
    Sent,
    /// 4: cancelled.
    Cancelled,
    /// 5: blocked by AML checks.
    AmlBlock,
    /// A code this version does not know.
    Unknown(u8),
}

impl TradeStatus {
    /// Numeric status code.
    pub fn code(&self) -> u8 {
        (*self).into()
    }

    /// Whether the trade can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TradeStatus::Sent | TradeStatus::Cancelled | TradeStatus::AmlBlock
        )
    }
}

impl Default for TradeStatus {
    /// Code 0, which no live trade reports.
    fn default() -> Self {
        TradeStatus::Unknown(0)
    }
}

impl From<u8> for TradeStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => TradeStatus::AwaitingPayment,
            2 => TradeStatus::AwaitingConfirmations,
            3 => TradeStatus::Sent,
            4 => TradeStatus::Cancelled,
            5 => TradeStatus::AmlBlock,
            other => TradeStatus::Unknown(other),
        }
    }
}

impl From<TradeStatus> for u8 {
    fn from(status: TradeStatus) -> Self {
        match status {
            TradeStatus::AwaitingPayment => 1,
            TradeStatus::AwaitingConfirmations => 2,
            TradeStatus::Sent => 3,
            TradeStatus::Cancelled => 4,
            TradeStatus::AmlBlock => 5,
            TradeStatus::Unknown(code) => code,
        }
    }
}

/// A trade as reported by the exchange.
///
/// Missing or null fields decode as zero values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    /// Currency being sent.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub send_name: String,
    /// Network of the currency being sent.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub send_network: String,
    /// Network of the currency being received.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub get_network: String,
    /// Unique id of the trade.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub uniq_id: String,
    /// Current status.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub status: TradeStatus,
    /// Wallet the customer pays into.
    #[serde(default)]
    pub payment_wallet: Option<String>,
    /// Hash of the customer's payment transaction.
    #[serde(rename = "userPaidHash", default)]
    pub user_paid_hash: Option<String>,
    /// Hash of the exchange's payout transaction.
    #[serde(rename = "ourHash", default)]
    pub our_hash: Option<String>,
    /// Receiving credentials.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub get_creds: String,
    /// Network commission.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub network_commission: Decimal,
    /// Creation time, unix seconds.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub date: i64,
    /// Expiry time, unix seconds.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub time_expire: i64,
    /// Amount to pay.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub send_value: Decimal,
    /// Amount to receive.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub get_value: Decimal,
}
