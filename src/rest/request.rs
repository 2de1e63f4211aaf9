//! Request descriptors passed to the transport core.

use std::borrow::Cow;

use reqwest::Method;
use serde::Serialize;

use crate::error::YellowChangerError;

/// Body of a request.
///
/// A body is serialized once, when it is attached, so the bytes that get
/// signed are the bytes that get sent. `Json("{}")` and `Empty` are distinct:
/// only the former is signed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    /// No body; the request is not signed.
    #[default]
    Empty,
    /// Serialized JSON body.
    Json(String),
}

impl Payload {
    /// The serialized body, if any.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Payload::Empty => None,
            Payload::Json(body) => Some(body),
        }
    }
}

/// One HTTP call against the YellowChanger API.
///
/// # Example
///
/// ```rust
/// use yellow_changer::rest::{Payload, Request};
///
/// let request = Request::get("/trades/getInfo")
///     .json(&serde_json::json!({ "uniq_id": "abc" }))
///     .unwrap();
/// assert_eq!(request.payload(), &Payload::Json(r#"{"uniq_id":"abc"}"#.to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    endpoint: Cow<'static, str>,
    payload: Payload,
}

impl Request {
    /// Create a bodiless request.
    pub fn new(method: Method, endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            payload: Payload::Empty,
        }
    }

    /// Create a GET request.
    pub fn get(endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Create a POST request.
    pub fn post(endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Attach a JSON body.
    pub fn json<B>(mut self, body: &B) -> Result<Self, YellowChangerError>
    where
        B: Serialize + ?Sized,
    {
        self.payload = Payload::Json(serde_json::to_string(body)?);
        Ok(self)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, with a leading slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request body.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}
