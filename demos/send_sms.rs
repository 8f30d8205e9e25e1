//! Example: Send an SMS and drain the inbound queue.
//!
//! Run with: cargo run --example send_sms -- +46123456789

use std::env;
use std::sync::Arc;
use std::time::Duration;

use spirius_sms_client::auth::EnvCredentials;
use spirius_sms_client::rest::SmsRestClient;
use spirius_sms_client::types::SendSms;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env()? {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set SPIRIUS_ACCOUNT_ID and SPIRIUS_SHARED_KEY to run this example.");
            return Ok(());
        }
    };

    let Some(recipient) = env::args().nth(1) else {
        println!("Usage: send_sms <recipient>");
        return Ok(());
    };

    let client = SmsRestClient::builder(credentials)
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("=== Send ===");
    let response = client
        .send_sms(&SendSms::new("Hello world!", recipient, "SPIRIUS"))
        .await?;
    println!("{} {}", response.status, response.body);

    println!("\n=== Inbound ===");
    loop {
        let response = client.pop_next_message().await?;
        if !response.is_success() || response.body.is_empty() {
            println!("No more messages ({})", response.status);
            break;
        }
        println!("{}", response.body);
    }

    Ok(())
}
