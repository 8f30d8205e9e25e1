//! Example: Reproduce a request signature offline.
//!
//! Run with: cargo run --example sign_request

use spirius_sms_client::auth::{
    Credentials, SignableRequest, authorization_header, body_digest_hex, canonical_message,
    sign_request,
};
use spirius_sms_client::types::SendSms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::new("SomeUser", "testsecret")?;
    let body = SendSms::new("Hello world!", "+46123456789", "SPIRIUS").to_request_body()?;

    println!("Body:        {}", String::from_utf8_lossy(body.as_bytes()));
    println!("Body SHA-1:  {}", body_digest_hex(body.as_bytes()));

    let request = SignableRequest::new("POST", "/sms/mt/send", 1_000_000_000, body.as_bytes());
    println!("Canonical message:\n{}", canonical_message(&request));

    let signature = sign_request(&credentials, &request)?;
    println!("Authorization: {}", authorization_header(&credentials, &signature));

    Ok(())
}
