/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{mock_api_key, mock_client, setup_mock_server};
use ezrentout_client::{ClientConfig, EzRentOutClient, EzRentOutError};
use rstest::rstest;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(EzRentOutClient::new("key", "acme"));
    assert_eq!(client.base_url().as_str(), "https://acme.ezrentout.com/");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(10),
        connect_timeout: Duration::from_secs(5),
    };
    let _client = assert_ok!(EzRentOutClient::with_config(config, "key", "acme"));
}

#[test]
fn test_from_env_reports_missing_key() {
    // Keep the variables unset for this process; the first lookup fails.
    if std::env::var("EZRENTOUT_API_KEY").is_ok() {
        return;
    }
    let err = EzRentOutClient::from_env().expect_err("expected missing config");
    assert!(matches!(err, EzRentOutError::Config(_)));
    assert_eq!(
        err.to_string(),
        "Configuration error: EZRENTOUT_API_KEY is not set"
    );
}

#[rstest]
#[case("get all asset", "Network Error", "Failed to get all asset: Network Error")]
#[case("get asset with id 12", "timed out", "Failed to get asset with id 12: timed out")]
#[case("create group", "422 Unprocessable Entity", "Failed to create group: 422 Unprocessable Entity")]
#[case("check API status", "connection refused", "Failed to check API status: connection refused")]
fn test_operation_error_rendering(
    #[case] action: &str,
    #[case] cause: &str,
    #[case] expected: &str,
) {
    let err = EzRentOutError::operation(action, cause);
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_requests_carry_token_and_content_type() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api_status.api"))
        .and(header("token", mock_api_key()))
        .and(header("content-type", "application/json; charset=UTF-8"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "up"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let status = assert_ok!(client.check_status().await);
    assert_eq!(status.status.as_deref(), Some("up"));
}

#[tokio::test]
async fn test_list_and_get_share_one_client() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/assets.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "assets": [{"id": 1, "name": "Crane"}],
            "total_pages": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/1.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "asset": {"id": 1, "name": "Crane"}
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let page = assert_ok!(client.get_all_assets(1).await);
    assert_eq!(page.data.len(), 1);

    let single = assert_ok!(client.get_asset(1).await);
    assert_eq!(single.asset.name, "Crane");
}

#[tokio::test]
async fn test_concurrent_calls_on_shared_reference() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [],
            "total_pages": 0
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/locations.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "locations": [],
            "total_pages": 0
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let (users, locations) =
        tokio::join!(client.get_all_users(1), client.get_all_locations(1));
    assert_ok!(users);
    assert_ok!(locations);
}
