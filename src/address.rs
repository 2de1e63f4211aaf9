//! Client-side wallet address format validation.
//!
//! Each supported network maps to a regular expression describing the shape
//! of its addresses. The check is purely syntactic: checksums are not
//! verified and no network is queried, so a well-formed address that does not
//! exist still passes.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::YellowChangerError;

const EVM_PATTERN: &str = r"^(0x)[0-9A-Fa-f]{40}$";

/// Network identifiers and their address patterns.
///
/// Adding a network is a single entry here.
const NETWORK_PATTERNS: &[(&str, &str)] = &[
    ("ERC20", EVM_PATTERN),
    ("BEP20", EVM_PATTERN),
    ("ARBITRUM", EVM_PATTERN),
    ("MATIC", EVM_PATTERN),
    ("POLYGON", EVM_PATTERN),
    ("AVAX", r"^(X-avax)[0-9A-Za-z]{39}$"),
    ("XMR", r"^[48][a-zA-Z\d]{94}([a-zA-Z\d]{11})?$"),
    ("TON", r"^[UE][Qf][0-9a-zA-Z_-]{46}$"),
    ("SOL", r"^[1-9A-HJ-NP-Za-km-z]{32,44}$"),
    ("DOGE", r"^(D|A|9)[a-km-zA-HJ-NP-Z1-9]{33,34}$"),
    (
        "BTC",
        r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$|^((bc1q)|(bc1p))[0-9A-Za-z]{37,62}$",
    ),
    ("TRC20", r"^T[1-9A-HJ-NP-Za-km-z]{33}$"),
    ("LTC", r"^(L|M)[A-Za-z0-9]{33}$|^(ltc1)[0-9A-Za-z]{39}$"),
    ("BCH", r"^[1][a-km-zA-HJ-NP-Z1-9]{25,34}$|^[0-9a-z]{42}$"),
    ("DASH", r"^[X7][0-9A-Za-z]{33}$"),
];

lazy_static! {
    static ref PATTERNS: HashMap<&'static str, Regex> = NETWORK_PATTERNS
        .iter()
        .map(|(network, pattern)| {
            let regex = Regex::new(pattern).expect("invalid address pattern");
            (*network, regex)
        })
        .collect();
}

/// Validate `address` against the address pattern of `network`.
///
/// Network identifiers are matched exactly (e.g. `"ERC20"`, not `"erc20"`).
///
/// # Errors
///
/// - [`YellowChangerError::InvalidNetwork`] if `network` is not supported.
/// - [`YellowChangerError::InvalidAddress`] if the address does not match.
///
/// # Example
///
/// ```rust
/// use yellow_changer::address::validate_address;
///
/// assert!(validate_address("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", "BTC").unwrap());
/// assert!(validate_address("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", "TRC20").is_err());
/// ```
pub fn validate_address(address: &str, network: &str) -> Result<bool, YellowChangerError> {
    let pattern = PATTERNS
        .get(network)
        .ok_or_else(|| YellowChangerError::InvalidNetwork(network.to_string()))?;

    if pattern.is_match(address) {
        Ok(true)
    } else {
        Err(YellowChangerError::InvalidAddress {
            address: address.to_string(),
            network: network.to_string(),
        })
    }
}

/// Supported network identifiers, in table order.
pub fn supported_networks() -> impl Iterator<Item = &'static str> {
    NETWORK_PATTERNS.iter().map(|(network, _)| *network)
}

/// Whether `network` has an address pattern.
pub fn is_supported_network(network: &str) -> bool {
    PATTERNS.contains_key(network)
}
