/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for lipaykripto-sdk tests

use lipaykripto_sdk::{ClientConfig, LipayClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_CLIENT_ID: &str = "C1";
#[allow(dead_code)]
pub const TEST_CLIENT_SECRET: &str = "S3CR3T";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, mounted under `/api` like production
pub fn test_client(server: &MockServer) -> LipayClient {
    let config = ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
        .with_base_url(format!("{}/api", server.uri()));
    LipayClient::new(config).expect("client init")
}

/// Mock bearer token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
