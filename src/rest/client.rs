//! YellowChanger REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder as MiddlewareBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tokio_util::sync::CancellationToken;

use crate::address::validate_address;
use crate::auth::{Credentials, sign_payload};
use crate::error::{ApiError, YellowChangerError};
use crate::rest::destinations::{DestinationsList, Limits, Side};
use crate::rest::endpoints::{API_KEY_HEADER, SIGNATURE_HEADER, YELLOWCHANGER_BASE_URL};
use crate::rest::rates::Rate;
use crate::rest::request::Request;
use crate::rest::trades::{CreateTradeRequest, Trade};
use crate::rest::traits::YellowChangerApi;

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction options matching the keys issued in the YellowChanger personal cabinet.
#[derive(Clone, Default)]
pub struct Options {
    /// Public key, sent as `Y_API_KEY`.
    pub public_key: String,
    /// Private key, used only for signing.
    pub private_key: String,
    /// Per-request timeout. `None` or zero means 30 seconds.
    pub client_timeout: Option<Duration>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("client_timeout", &self.client_timeout)
            .finish()
    }
}

/// The YellowChanger REST API client.
///
/// Cloning is cheap: clones share the connection pool and credentials.
///
/// # Example
///
/// ```rust,no_run
/// use yellow_changer::rest::{Client, Options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new(Options {
///         public_key: "public".into(),
///         private_key: "private".into(),
///         client_timeout: None,
///     })?;
///
///     let rates = client.all_rates().await?;
///     println!("{} currencies", rates.len());
///
///     Ok(())
/// }
/// ```
///
/// Calls can be tied to a cancellation token:
///
/// ```rust,no_run
/// use yellow_changer::auth::Credentials;
/// use yellow_changer::rest::Client;
/// use tokio_util::sync::CancellationToken;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder(Credentials::new("public", "private")).build()?;
///     let token = CancellationToken::new();
///
///     let scoped = client.with_cancellation(token.clone());
///     let handle = tokio::spawn(async move { scoped.destinations_list().await });
///     token.cancel();
///
///     assert!(handle.await?.is_err());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<Credentials>,
    timeout: Duration,
    cancel_token: Option<CancellationToken>,
}

impl Client {
    /// Create a client from [`Options`].
    pub fn new(options: Options) -> Result<Self, YellowChangerError> {
        let mut builder = Self::builder(Credentials::new(options.public_key, options.private_key));
        if let Some(timeout) = options.client_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Create a new client builder.
    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// A handle whose calls fail with [`YellowChangerError::Cancelled`] once `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel_token: Some(token),
            ..self.clone()
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate `address` against the pattern for `network`.
    ///
    /// See [`validate_address`].
    pub fn validate_wallet(&self, address: &str, network: &str) -> Result<bool, YellowChangerError> {
        validate_address(address, network)
    }

    /// Execute one request and return the raw response body.
    ///
    /// Bodies are signed with the private key; every request carries the
    /// public key. Statuses >= 400 are decoded as [`ApiError`].
    pub async fn execute(&self, request: &Request) -> Result<Vec<u8>, YellowChangerError> {
        let Some(token) = &self.cancel_token else {
            return self.dispatch(request).await;
        };
        if token.is_cancelled() {
            return Err(YellowChangerError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(YellowChangerError::Cancelled),
            result = self.dispatch(request) => result,
        }
    }

    /// Execute one request and decode the response body.
    pub(crate) async fn execute_json<T>(&self, request: &Request) -> Result<T, YellowChangerError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.execute(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn dispatch(&self, request: &Request) -> Result<Vec<u8>, YellowChangerError> {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let mut builder = self
            .http_client
            .request(request.method().clone(), &url)
            .header(API_KEY_HEADER, &self.credentials.public_key)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = request.payload().as_json() {
            let signature = sign_payload(body, self.credentials.expose_secret())?;
            builder = builder
                .header(SIGNATURE_HEADER, signature)
                .body(body.to_owned());
        }

        tracing::debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            signed = request.payload().as_json().is_some(),
            "sending YellowChanger request"
        );

        let response = builder.send().await?;
        self.parse_response(response).await
    }

    /// Split a response into a success body or an [`ApiError`].
    async fn parse_response(&self, response: reqwest::Response) -> Result<Vec<u8>, YellowChangerError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() >= 400 {
            let api_error: ApiError = serde_json::from_slice(&body)?;
            tracing::debug!(
                http_status = status.as_u16(),
                status_code = api_error.status_code,
                message = %api_error.message,
                "YellowChanger API error"
            );
            return Err(YellowChangerError::Api(api_error));
        }

        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .field("cancellable", &self.cancel_token.is_some())
            .finish()
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: YELLOWCHANGER_BASE_URL.to_string(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout. Zero keeps the default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client, YellowChangerError> {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("yellow-changer-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("yellow-changer-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        let client = MiddlewareBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Client {
            http_client: client,
            base_url: self.base_url,
            credentials: Arc::new(self.credentials),
            timeout: self.timeout,
            cancel_token: None,
        })
    }
}

// YellowChangerApi trait implementation.

impl YellowChangerApi for Client {
    async fn all_rates(&self) -> Result<Vec<Rate>, YellowChangerError> {
        Client::all_rates(self).await
    }

    async fn rates_in_direction(&self, direction: &str) -> Result<Rate, YellowChangerError> {
        Client::rates_in_direction(self, direction).await
    }

    async fn destinations_list(&self) -> Result<DestinationsList, YellowChangerError> {
        Client::destinations_list(self).await
    }

    async fn currency_limits(
        &self,
        currency: &str,
        network: &str,
        side: Side,
    ) -> Result<Limits, YellowChangerError> {
        Client::currency_limits(self, currency, network, side).await
    }

    async fn create_trade(&self, request: &CreateTradeRequest) -> Result<Trade, YellowChangerError> {
        Client::create_trade(self, request).await
    }

    async fn trade_info(&self, uniq_id: &str) -> Result<Trade, YellowChangerError> {
        Client::trade_info(self, uniq_id).await
    }
}
