mod common;

use common::{envelope, setup};
use serde_json::json;
use tm_client::{Endpoint, Error, PageQuery, QueryParams, SectorIndexQuery, TokenFilter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_bad_request_carries_vendor_message() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/quantmetrics"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({
      "success": false, "message": "Some thing wrong", "length": 0, "data": []
    })))
    .mount(&server)
    .await;

  match client.analytics().quantmetrics(&TokenFilter::new().with_symbol("BTC")).await {
    Err(Error::Api { status, message }) => {
      assert_eq!(status, 400);
      assert_eq!(message, "Some thing wrong");
    }
    other => panic!("Expected Api error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_unauthorized() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/correlation"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
    .mount(&server)
    .await;

  let result = client.analytics().correlation(&TokenFilter::new()).await;
  assert!(matches!(result, Err(Error::ApiKey(_))));
}

#[tokio::test]
async fn test_too_many_requests() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/crypto-investors"))
    .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
    .expect(1)
    .mount(&server)
    .await;

  let result = client.research().crypto_investors(&PageQuery::new()).await;
  assert!(matches!(result, Err(Error::RateLimit(_))));
}

#[tokio::test]
async fn test_server_error() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/ai-reports"))
    .respond_with(ResponseTemplate::new(503).set_body_string("<html>unavailable</html>"))
    .mount(&server)
    .await;

  let result = client.research().ai_reports(&TokenFilter::new()).await;
  assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_success_false_in_ok_body() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/scenario-analysis"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "No data"})))
    .mount(&server)
    .await;

  let result = client.analytics().scenario_analysis(&TokenFilter::new()).await;
  assert!(matches!(result, Err(Error::Api { status: 200, .. })));
}

#[tokio::test]
async fn test_malformed_body() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/sentiments"))
    .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
    .mount(&server)
    .await;

  let result = client.sentiment().sentiments(&PageQuery::new()).await;
  assert!(matches!(result, Err(Error::Parse(_))));
}

#[tokio::test]
async fn test_missing_required_param_not_sent() {
  let (server, client) = setup().await;

  Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let result = client.indices().sector_indices_holdings(&SectorIndexQuery::new("  ")).await;
  assert!(matches!(result, Err(Error::InvalidParameter { .. })));

  let result = client.raw(Endpoint::IndicesPerformance, QueryParams::new()).await;
  assert!(matches!(result, Err(Error::InvalidParameter { name: "type", .. })));
}

#[tokio::test]
async fn test_raw_returns_json() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/investor-indices"))
    .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"TOKEN_ID": 3306}]))))
    .mount(&server)
    .await;

  let body = client.raw(Endpoint::InvestorIndices, QueryParams::new()).await.expect("raw");
  assert_eq!(body["data"][0]["TOKEN_ID"], 3306);
}
