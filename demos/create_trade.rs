//! Example: Creating a trade and polling its status.
//!
//! Run with: cargo run --example create_trade -- <btc-address>

use std::time::Duration;

use rust_decimal::Decimal;
use yellow_changer::auth::Credentials;
use yellow_changer::rest::trades::CreateTradeRequest;
use yellow_changer::rest::{Client, Side};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let _ = dotenv::dotenv();

    let address = std::env::args()
        .nth(1)
        .ok_or("usage: create_trade <btc-address>")?;

    let credentials = Credentials::from_env()
        .ok_or("YELLOWCHANGER_PUBLIC_KEY and YELLOWCHANGER_PRIVATE_KEY must be set")?;
    let client = Client::builder(credentials)
        .timeout(Duration::from_secs(10))
        .build()?;

    // Reject obviously malformed destinations before touching the API.
    client.validate_wallet(&address, "BTC")?;

    let amount = Decimal::new(150, 0);
    let limits = client.currency_limits("USDT", "TRC20", Side::PayIn).await?;
    if !limits.contains(amount) {
        return Err(format!(
            "{amount} USDT is outside {} - {}",
            limits.min_amount, limits.max_amount
        )
        .into());
    }

    let request = CreateTradeRequest::new("USDT", "TRC20", "BTC", "BTC", address)
        .send_value(amount);
    let trade = client.create_trade(&request).await?;
    println!("Trade {} created", trade.uniq_id);
    if let Some(wallet) = &trade.payment_wallet {
        println!("Send {} {} to {wallet}", trade.send_value, trade.send_name);
    }

    loop {
        let info = client.trade_info(&trade.uniq_id).await?;
        println!("status: {:?}", info.status);
        if info.status.is_final() {
            break;
        }
        tokio::time::sleep(Duration::from_secs(15)).await;
    }

    Ok(())
}
