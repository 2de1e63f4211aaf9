//! Example: Listing rates and destination limits.
//!
//! Reads keys from `YELLOWCHANGER_PUBLIC_KEY` and `YELLOWCHANGER_PRIVATE_KEY`
//! (a `.env` file works too).
//!
//! Run with: cargo run --example rates

use yellow_changer::auth::Credentials;
use yellow_changer::rest::{Client, Side};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let _ = dotenv::dotenv();

    let credentials = Credentials::from_env()
        .ok_or("YELLOWCHANGER_PUBLIC_KEY and YELLOWCHANGER_PRIVATE_KEY must be set")?;
    let client = Client::builder(credentials).build()?;

    println!("=== All Rates ===");
    let rates = client.all_rates().await?;
    for rate in rates.iter().take(5) {
        println!("{} ({})", rate.currency, rate.name);
        for network in &rate.withdraw_networks {
            println!(
                "  {}: fee {} min withdraw {}",
                network.network, network.fee, network.min_withdraw
            );
        }
    }

    println!("\n=== USDT Direction ===");
    let usdt = client.rates_in_direction("USDT").await?;
    if let Some(rub) = usdt.rate_to("RUB") {
        println!("1 USDT = {rub} RUB");
    }

    println!("\n=== Limits ===");
    match client.currency_limits("USDT", "TRC20", Side::PayIn).await {
        Ok(limits) => println!(
            "USDT/TRC20 deposit: {} - {}",
            limits.min_amount, limits.max_amount
        ),
        Err(err) => println!("lookup failed: {err}"),
    }

    Ok(())
}
