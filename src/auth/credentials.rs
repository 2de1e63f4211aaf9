//! Credential management for YellowChanger API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the public key.
pub const PUBLIC_KEY_VAR: &str = "YELLOWCHANGER_PUBLIC_KEY";
/// Default environment variable holding the private key.
pub const PRIVATE_KEY_VAR: &str = "YELLOWCHANGER_PRIVATE_KEY";

/// API credentials from the YellowChanger personal cabinet.
///
/// The public key is sent with every request in the `Y_API_KEY` header.
/// The private key is only used to sign request bodies and never leaves
/// the process.
#[derive(Clone)]
pub struct Credentials {
    /// The public key (sent as `Y_API_KEY`)
    pub public_key: String,
    /// The private key (used for signing)
    private_key: SecretString,
}

impl Credentials {
    /// Create new credentials from a public and private key.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::from(private_key.into()),
        }
    }

    /// Get the private key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.private_key.expose_secret()
    }

    /// Read credentials from `YELLOWCHANGER_PUBLIC_KEY` and `YELLOWCHANGER_PRIVATE_KEY`.
    ///
    /// Returns `None` if either variable is not set.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(PUBLIC_KEY_VAR, PRIVATE_KEY_VAR)
    }

    /// Read credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is not set.
    pub fn from_env_vars(public_var: &str, private_var: &str) -> Option<Self> {
        let public_key = std::env::var(public_var).ok()?;
        let private_key = std::env::var(private_var).ok()?;
        Some(Self::new(public_key, private_key))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
