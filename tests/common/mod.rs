/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ezrentout-client tests

use ezrentout_client::{ClientConfig, EzRentOutClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key used by every mocked client
pub fn mock_api_key() -> &'static str {
    "test-api-key"
}

/// Client bound to a mock server
pub fn mock_client(server: &MockServer) -> EzRentOutClient {
    EzRentOutClient::with_config_and_base_url(ClientConfig::default(), mock_api_key(), &server.uri())
        .expect("client init")
}
