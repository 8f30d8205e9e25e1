//! Common types used across the Spirius client library.

pub mod body;
pub mod sms;

pub use body::{OrderedBody, RequestBody};
pub use sms::{ApiResponse, SendSms};
