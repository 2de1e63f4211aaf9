//! HMAC-SHA256 signature generation for YellowChanger API authentication.
//!
//! Requests carrying a JSON body are signed as:
//! ```text
//! hex(HMAC-SHA256(body, private_key))
//! ```
//!
//! The signature is sent in the `Signature` header and must be computed over
//! the exact bytes placed on the wire.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::YellowChangerError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a serialized request payload with the private key.
///
/// # Example
///
/// ```rust
/// use yellow_changer::auth::sign_payload;
///
/// let signature = sign_payload(r#"{"uniq_id":"abc"}"#, "private_key")?;
/// assert_eq!(signature.len(), 64);
/// # Ok::<(), yellow_changer::YellowChangerError>(())
/// ```
pub fn sign_payload(payload: &str, private_key: &str) -> Result<String, YellowChangerError> {
    let mut mac = HmacSha256::new_from_slice(private_key.as_bytes())
        .map_err(|e| YellowChangerError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
