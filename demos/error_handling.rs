//! Example: Working with YellowChangerError and ApiError.
//!
//! Run with: cargo run --example error_handling

use yellow_changer::address::validate_address;
use yellow_changer::{ApiError, YellowChangerError};

fn describe(err: &YellowChangerError) {
    match err {
        YellowChangerError::Api(api_error) if api_error.is_unauthorized() => {
            println!("check your keys: {api_error}");
        }
        YellowChangerError::Api(api_error) => println!("API rejected the call: {api_error}"),
        YellowChangerError::InvalidNetwork(network) => println!("no pattern for {network}"),
        YellowChangerError::InvalidAddress { address, network } => {
            println!("{address} is not a {network} address");
        }
        err if err.is_transport() => println!("transport problem: {err}"),
        other => println!("other error: {other}"),
    }
}

fn main() {
    let api_error = ApiError::new(401, "invalid signature");
    println!("API error: {api_error}");
    println!("Client error: {}", api_error.is_client_error());
    describe(&YellowChangerError::Api(api_error));

    describe(&YellowChangerError::Timeout);

    if let Err(err) = validate_address("0x52908400098527886E0F7030069857D2E4169EE7", "BTC") {
        describe(&err);
    }
    if let Err(err) = validate_address("whatever", "UNKNOWNNET") {
        describe(&err);
    }
}
