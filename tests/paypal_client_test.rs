use payouts::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_AUTH: &str = "Basic aWQtMTpzZWNyZXQtMQ==";

fn config(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::new(
        Environment::Sandbox,
        Credentials::new("id-1", "secret-1"),
    );
    config.base_url = Some(server.uri());
    config
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn request() -> PayoutRequest {
    let payments = vec![
        Payment {
            batch_id: BatchId::new("batch-1"),
            item_id: ItemId::new("1"),
            first_name: Some("Ana".to_string()),
            receiver_email: "ana@example.com".to_string(),
            amount: Amount::from_minor(1050),
            currency: Currency::Usd,
        },
        Payment {
            batch_id: BatchId::new("batch-1"),
            item_id: ItemId::new("2"),
            first_name: Some("Bo".to_string()),
            receiver_email: "bo@example.com".to_string(),
            amount: Amount::from_minor(7),
            currency: Currency::Php,
        },
    ];

    PayoutRequest::for_batch(
        &BatchId::new("batch-1"),
        &payments,
        &MessageTemplates::for_profile(Profile::Strict, "the memory study"),
    )
}

#[tokio::test]
async fn accepted_payout_returns_batch_id() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_partial_json(json!({
            "sender_batch_header": {
                "sender_batch_id": "batch-1",
                "email_subject": "Thank you for participating in the memory study; here is your incentive payment"
            },
            "items": [
                {
                    "recipient_type": "EMAIL",
                    "amount": { "value": "10.50", "currency": "USD" },
                    "receiver": "ana@example.com",
                    "note": "Thank you for playing, Ana! We hope you'll participate in additional experiments.",
                    "sender_item_id": "1"
                },
                {
                    "recipient_type": "EMAIL",
                    "amount": { "value": "0.07", "currency": "PHP" },
                    "receiver": "bo@example.com",
                    "sender_item_id": "2"
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "batch_header": {
                "payout_batch_id": "PB-777",
                "batch_status": "PENDING"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaypalClient::connect(&config(&server)).await.unwrap();
    let receipt = client.create_payout(&request()).await.unwrap();

    assert_eq!(receipt.payout_batch_id, "PB-777");
    assert_eq!(receipt.batch_status.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn rejected_payout_carries_api_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "name": "INSUFFICIENT_FUNDS",
            "message": "Sender does not have sufficient funds.",
            "debug_id": "dbg-1",
            "details": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaypalClient::connect(&config(&server)).await.unwrap();
    let result = client.create_payout(&request()).await;

    match result {
        Err(ApiError::Rejected { status, error }) => {
            assert_eq!(status, 422);
            assert_eq!(error.name, "INSUFFICIENT_FUNDS");
            assert_eq!(error.debug_id.as_deref(), Some("dbg-1"));
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_is_unexpected_response() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = PaypalClient::connect(&config(&server)).await.unwrap();
    let result = client.create_payout(&request()).await;

    assert!(matches!(
        result,
        Err(ApiError::UnexpectedResponse { status: 502, ref body }) if body == "bad gateway"
    ));
}

#[tokio::test]
async fn oauth_style_error_keeps_raw_body() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let oauth_error =
        r#"{"error":"invalid_token","error_description":"Token signature verification failed"}"#;
    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .respond_with(ResponseTemplate::new(401).set_body_string(oauth_error))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaypalClient::connect(&config(&server)).await.unwrap();
    let err = client.create_payout(&request()).await.unwrap_err();

    match &err {
        ApiError::UnexpectedResponse { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, oauth_error);
        }
        other => panic!("Expected UnexpectedResponse, got {:?}", other),
    }
    assert!(err.to_string().contains("Token signature verification failed"));
}

#[tokio::test]
async fn empty_error_object_keeps_raw_body() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"name":"","message":""}"#))
        .mount(&server)
        .await;

    let client = PaypalClient::connect(&config(&server)).await.unwrap();
    let result = client.create_payout(&request()).await;

    assert!(matches!(
        result,
        Err(ApiError::UnexpectedResponse { status: 400, .. })
    ));
}

#[tokio::test]
async fn failed_token_exchange_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .expect(1)
        .mount(&server)
        .await;

    let result = PaypalClient::connect(&config(&server)).await;

    match result {
        Err(ApiError::Auth { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid_client");
        }
        Err(other) => panic!("Expected Auth error, got {:?}", other),
        Ok(_) => panic!("Expected Auth error, got a client"),
    }
}

#[tokio::test]
async fn secret_never_appears_in_debug_output() {
    let server = MockServer::start().await;
    let rendered = format!("{:?}", config(&server));

    assert!(rendered.contains("REDACTED"));
    assert!(!rendered.contains("secret-1"));
}
