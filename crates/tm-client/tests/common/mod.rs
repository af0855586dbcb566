#![allow(dead_code)]

use tm_client::TokenMetricsClient;
use tm_core::Config;
use wiremock::MockServer;

pub const TEST_KEY: &str = "tm-integration-key";

/// Start a mock server and a client pointed at it
pub async fn setup() -> (MockServer, TokenMetricsClient) {
  let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("tm_client=debug").try_init();

  let server = MockServer::start().await;
  let config = Config::default_with_key(TEST_KEY.to_string()).with_base_url(server.uri());
  let client = TokenMetricsClient::new(config).expect("client");
  (server, client)
}

/// Standard data envelope around `rows`
pub fn envelope(rows: serde_json::Value) -> serde_json::Value {
  let length = rows.as_array().map(|r| r.len()).unwrap_or(0);
  serde_json::json!({
    "success": true,
    "message": "Data fetched successfully",
    "length": length,
    "data": rows,
  })
}
