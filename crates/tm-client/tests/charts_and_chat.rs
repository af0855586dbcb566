mod common;

use common::{setup, TEST_KEY};
use serde_json::json;
use tm_client::{ChartQuery, ChartScale, ChatRequest, Endpoint, Error, MarketPerspective, TimeFrame};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn chart_body() -> serde_json::Value {
  json!({
    "success": true,
    "message": "Data fetched successfully",
    "chartUrl": "https://tm-prtnr-plan.s3.amazonaws.com/chart_1708438004713.png"
  })
}

#[tokio::test]
async fn test_token_chart_defaults() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/token-details-price-charts"))
    .and(header("api_key", TEST_KEY))
    .and(query_param("token_id", "3375"))
    .and(query_param("category", "trader"))
    .and(query_param("timeFrame", "MAX"))
    .and(query_param("chartFilters", "price,trader_grade,bullish,bearish"))
    .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
    .expect(1)
    .mount(&server)
    .await;

  let chart = client.charts().token_details_price_charts(&ChartQuery::for_token(3375)).await.expect("chart");
  assert!(chart.url().is_some_and(|u| u.ends_with(".png")));
}

#[tokio::test]
async fn test_token_chart_investor_filters() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/token-details-price-charts"))
    .and(query_param("category", "investor"))
    .and(query_param("timeFrame", "1M"))
    .and(query_param("chartFilters", "price,investor_grade"))
    .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
    .expect(1)
    .mount(&server)
    .await;

  let query = ChartQuery::for_token(3375).with_perspective(MarketPerspective::Investor).with_time_frame(TimeFrame::OneMonth);
  client.charts().token_details_price_charts(&query).await.expect("chart");
}

#[tokio::test]
async fn test_market_chart_without_params() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/market-bull-and-bear-charts"))
    .and(query_param_is_missing("timeFrame"))
    .and(query_param_is_missing("chartFilters"))
    .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
    .expect(1)
    .mount(&server)
    .await;

  client.charts().market_bull_and_bear_charts().await.expect("chart");
}

#[tokio::test]
async fn test_resistance_chart_scale() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/resistance-and-support-charts"))
    .and(query_param("token_id", "3306"))
    .and(query_param("timeFrame", "3M"))
    .and(query_param("chartFilters", "log_scale"))
    .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
    .expect(1)
    .mount(&server)
    .await;

  let query = ChartQuery::for_token(3306).with_scale(ChartScale::Log);
  client.charts().chart(Endpoint::ResistanceAndSupportCharts, &query).await.expect("chart");
}

#[tokio::test]
async fn test_tmai_posts_messages() {
  let (server, client) = setup().await;

  Mock::given(method("POST"))
    .and(path("/v2/tmai"))
    .and(header("x-api-key", TEST_KEY))
    .and(body_json(json!({"messages": [{"user": "What is BTC?"}, {"user": "And ETH?"}]})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "success": true,
      "message": "AI Chatbot response successful",
      "answer": "Ethereum is a programmable blockchain.",
      "thread": [{"user": "What is BTC?"}, {"user": "And ETH?"}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let request = ChatRequest::with_history(["What is BTC?"], "And ETH?");
  let response = client.ai().tmai(&request).await.expect("tmai");
  assert_eq!(response.thread.len(), 2);
  assert!(response.answer.unwrap().starts_with("Ethereum"));
}

#[tokio::test]
async fn test_ask_without_answer() {
  let (server, client) = setup().await;

  Mock::given(method("POST"))
    .and(path("/v2/tmai"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "empty"})))
    .mount(&server)
    .await;

  let result = client.ai().ask("What is the next 100x coin ?").await;
  assert!(matches!(result, Err(Error::Parse(_))));
}
