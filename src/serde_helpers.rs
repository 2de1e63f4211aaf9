//! Custom serde helpers for YellowChanger response quirks.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value.
///
/// Pair with `#[serde(default)]` so a missing field is tolerated too.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use yellow_changer::serde_helpers::null_as_default;
///
/// #[derive(Deserialize)]
/// struct Response {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     uniq_id: String,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"uniq_id":null}"#).unwrap();
/// assert_eq!(response.uniq_id, "");
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize an optional value, falling back to `T::default()`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Default + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default::deserialize", default)]
        count: i64,
        #[serde(deserialize_with = "null_as_default::deserialize", default)]
        amount: Decimal,
    }

    #[test]
    fn test_null_as_default() {
        let sample: Sample = serde_json::from_str(r#"{"count":null,"amount":null}"#).unwrap();
        assert_eq!(sample.count, 0);
        assert_eq!(sample.amount, Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_default() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.count, 0);
        assert_eq!(sample.amount, Decimal::ZERO);
    }

    #[test]
    fn test_present_values_pass_through() {
        let sample: Sample = serde_json::from_str(r#"{"count":7,"amount":"1.25"}"#).unwrap();
        assert_eq!(sample.count, 7);
        assert_eq!(sample.amount, "1.25".parse::<Decimal>().unwrap());
    }
}
