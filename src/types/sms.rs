//! Request and response types shared by the REST client.

use serde::de::DeserializeOwned;

use crate::error::SmsError;
use crate::types::body::{OrderedBody, RequestBody};

/// A mobile-terminated message to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    /// Message text.
    pub message: String,
    /// Recipient number in international format (e.g. `+46123456789`).
    pub to: String,
    /// Sender id or number.
    pub from: String,
}

impl SendSms {
    /// Create a new send request.
    pub fn new(
        message: impl Into<String>,
        to: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            to: to.into(),
            from: from.into(),
        }
    }

    /// Build the body as `message`, `to`, `from`, in that order.
    pub fn to_ordered_body(&self) -> Result<OrderedBody, SmsError> {
        OrderedBody::new()
            .field("message", &self.message)?
            .field("to", &self.to)?
            .field("from", &self.from)
    }

    /// Serialize to the bytes that will be signed and sent.
    pub fn to_request_body(&self) -> Result<RequestBody, SmsError> {
        self.to_ordered_body()?.to_request_body()
    }
}

/// Raw response returned by every API call.
///
/// The client does not interpret the body; callers decide how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON into a caller-chosen type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SmsError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
