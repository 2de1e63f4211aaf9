use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_decimal::Decimal;
use yellow_changer::YellowChangerError;
use yellow_changer::auth::Credentials;
use yellow_changer::rest::trades::{CreateTradeRequest, SbpBank, TradeStatus};
use yellow_changer::rest::{Client, Side, YellowChangerApi};

fn build_client(server: &MockServer) -> Client {
    Client::builder(Credentials::new("test_public", "test_private"))
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn destinations_response() -> serde_json::Value {
    serde_json::json!({
        "payin": [
            {"currency": "BTC", "network": "BTC", "limit": {"min_amount": 0.001, "max_amount": 10}},
            {"currency": "USDT", "network": "TRC20", "limit": {"min_amount": 10, "max_amount": 50000}}
        ],
        "payout": [
            {
                "currency": "BTC",
                "network": "BTC",
                "limit": {"min_amount": 0.002, "max_amount": 5},
                "commission": {"fee_amount": 0.0002}
            }
        ]
    })
}

fn trade_response(status: u8) -> serde_json::Value {
    serde_json::json!({
        "send_name": "USDT",
        "send_network": "TRC20",
        "get_network": "BTC",
        "uniq_id": "order-42",
        "status": status,
        "payment_wallet": "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL",
        "userPaidHash": null,
        "ourHash": null,
        "get_creds": "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
        "network_commission": 0,
        "date": 1_700_000_000,
        "time_expire": 1_700_001_800,
        "send_value": "150.5",
        "get_value": "0.0023"
    })
}

async fn mount_destinations(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/trades/destinationsList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(destinations_response()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_all_rates() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "currency": "USDT",
            "name": "Tether",
            "withdraw_networks": [
                {"network": "TRC20", "fee": 1, "min_withdraw": 10},
                {"network": "ERC20", "fee": 5, "min_withdraw": 20}
            ],
            "conversion_rates": {"BTC": 0.0000158, "RUB": 92.4}
        },
        {
            "currency": "BTC",
            "name": "Bitcoin",
            "withdraw_networks": [{"network": "BTC", "fee": 0.0002, "min_withdraw": 0.001}],
            "conversion_rates": {"USDT": 63000}
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/trades/allRates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rates = client.all_rates().await.unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].withdraw_networks[1].network, "ERC20");
    assert_eq!(rates[1].rate_to("USDT"), Some(dec("63000")));
    assert_eq!(rates[1].withdraw_networks[0].fee, dec("0.0002"));
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let server = MockServer::start().await;
    mount_destinations(&server).await;
    Mock::given(method("GET"))
        .and(path("/trades/allRates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"currency": "BTC", "name": "Bitcoin", "withdraw_networks": [], "conversion_rates": {"USDT": 63000}}
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(
        client.all_rates().await.unwrap(),
        client.all_rates().await.unwrap()
    );
    assert_eq!(
        client.destinations_list().await.unwrap(),
        client.destinations_list().await.unwrap()
    );
}

#[tokio::test]
async fn test_rates_in_direction_sends_signed_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "currency": "BTC",
        "name": "Bitcoin",
        "withdraw_networks": [],
        "conversion_rates": {"USDT": 63000, "RUB": 5800000}
    });

    Mock::given(method("GET"))
        .and(path("/trades/ratesInDirection"))
        .and(header_exists("Signature"))
        .and(body_json(serde_json::json!({ "direction": "BTC" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rate = client.rates_in_direction("BTC").await.unwrap();
    assert_eq!(rate.rate_to("RUB"), Some(dec("5800000")));
}

#[tokio::test]
async fn test_destinations_list() {
    let server = MockServer::start().await;
    mount_destinations(&server).await;

    let client = build_client(&server);
    let destinations = client.destinations_list().await.unwrap();
    assert_eq!(destinations.pay_in.len(), 2);
    assert_eq!(destinations.pay_out[0].commission.fee_amount, dec("0.0002"));
}

#[tokio::test]
async fn test_currency_limits_pay_in_and_pay_out() {
    let server = MockServer::start().await;
    mount_destinations(&server).await;

    let client = build_client(&server);

    let limits = client.currency_limits("BTC", "BTC", Side::PayIn).await.unwrap();
    assert_eq!(limits.min_amount, dec("0.001"));
    assert_eq!(limits.max_amount, dec("10"));

    let limits = client.currency_limits("BTC", "BTC", Side::PayOut).await.unwrap();
    assert_eq!(limits.min_amount, dec("0.002"));
    assert_eq!(limits.max_amount, dec("5"));

    // One fetch per lookup, nothing cached.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_currency_limits_not_found() {
    let server = MockServer::start().await;
    mount_destinations(&server).await;

    let client = build_client(&server);
    let err = client
        .currency_limits("ETH", "ERC20", Side::PayIn)
        .await
        .unwrap_err();
    assert!(matches!(err, YellowChangerError::CurrencyNotFound { .. }), "got {err:?}");

    // USDT is only a pay-in destination.
    let err = client
        .currency_limits("USDT", "TRC20", Side::PayOut)
        .await
        .unwrap_err();
    assert!(matches!(err, YellowChangerError::CurrencyNotFound { .. }));
}

#[tokio::test]
async fn test_currency_limits_propagates_fetch_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trades/destinationsList"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status_code": 401,
            "message": "invalid key"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .currency_limits("BTC", "BTC", Side::PayIn)
        .await
        .unwrap_err();
    assert!(err.api_error().unwrap().is_unauthorized());
}

#[tokio::test]
async fn test_create_trade() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trades/createTrade"))
        .and(header("Y_API_KEY", "test_public"))
        .and(header_exists("Signature"))
        .and(body_json(serde_json::json!({
            "send_name": "USDT",
            "get_name": "BTC",
            "send_network": "TRC20",
            "get_network": "BTC",
            "send_value": 150.5,
            "get_creds": "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
            "uniq_id": "order-42"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trade_response(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateTradeRequest::new(
        "USDT",
        "TRC20",
        "BTC",
        "BTC",
        "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
    )
    .send_value(dec("150.5"))
    .uniq_id("order-42");

    let trade = client.create_trade(&request).await.unwrap();
    assert_eq!(trade.uniq_id, "order-42");
    assert_eq!(trade.status, TradeStatus::AwaitingPayment);
    assert_eq!(trade.send_value, dec("150.5"));
    assert_eq!(trade.get_value, dec("0.0023"));
    assert!(trade.user_paid_hash.is_none());
}

#[tokio::test]
async fn test_create_trade_sbp() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trades/createTrade"))
        .and(body_json(serde_json::json!({
            "send_name": "USDT",
            "get_name": "RUB",
            "send_network": "TRC20",
            "get_network": "SBPRUB",
            "get_value": 10000.0,
            "get_creds": "+79990000000",
            "sbp_bank": "sbpsber"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trade_response(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateTradeRequest::new("USDT", "TRC20", "RUB", "SBPRUB", "+79990000000")
        .get_value(dec("10000"))
        .sbp_bank(SbpBank::Sber);
    client.create_trade(&request).await.unwrap();
}

#[tokio::test]
async fn test_trade_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trades/getInfo"))
        .and(header_exists("Signature"))
        .and(body_json(serde_json::json!({ "uniq_id": "order-42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trade_response(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trade = client.trade_info("order-42").await.unwrap();
    assert_eq!(trade.status, TradeStatus::Sent);
    assert!(trade.status.is_final());
    assert_eq!(trade.time_expire - trade.date, 1800);
}

#[tokio::test]
async fn test_client_through_trait() {
    async fn lookup<C: YellowChangerApi>(client: &C) -> Result<Decimal, YellowChangerError> {
        let limits = client.currency_limits("USDT", "TRC20", Side::PayIn).await?;
        Ok(limits.min_amount)
    }

    let server = MockServer::start().await;
    mount_destinations(&server).await;

    let client = build_client(&server);
    assert_eq!(lookup(&client).await.unwrap(), dec("10"));
}

#[tokio::test]
async fn test_validate_wallet() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let evm = format!("0x{}", "a1".repeat(20));
    assert!(client.validate_wallet(&evm, "ERC20").unwrap());
    assert!(matches!(
        client.validate_wallet(&evm, "BTC"),
        Err(YellowChangerError::InvalidAddress { .. })
    ));
    assert!(matches!(
        client.validate_wallet(&evm, "UNKNOWNNET"),
        Err(YellowChangerError::InvalidNetwork(_))
    ));
    assert!(
        client
            .validate_wallet("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2", "BTC")
            .unwrap()
    );

    assert!(server.received_requests().await.unwrap().is_empty());
}
