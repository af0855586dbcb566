//! Hourly market sentiment

use serde::{Deserialize, Serialize};

/// Row of `/v2/sentiments`
///
/// Labels are kept verbatim (`neutral`, `very negative`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
  /// Hour the sentiment was computed for
  #[serde(rename = "DATETIME")]
  pub datetime: String,

  #[serde(rename = "MARKET_SENTIMENT_GRADE")]
  pub market_sentiment_grade: Option<f64>,

  #[serde(rename = "MARKET_SENTIMENT_LABEL")]
  pub market_sentiment_label: Option<String>,

  #[serde(rename = "NEWS_SENTIMENT_GRADE")]
  pub news_sentiment_grade: Option<f64>,

  #[serde(rename = "NEWS_SENTIMENT_LABEL")]
  pub news_sentiment_label: Option<String>,

  #[serde(rename = "NEWS_SUMMARY")]
  pub news_summary: Option<String>,

  #[serde(rename = "REDDIT_SENTIMENT_GRADE")]
  pub reddit_sentiment_grade: Option<f64>,

  #[serde(rename = "REDDIT_SENTIMENT_LABEL")]
  pub reddit_sentiment_label: Option<String>,

  #[serde(rename = "REDDIT_SUMMARY")]
  pub reddit_summary: Option<String>,

  #[serde(rename = "TWITTER_SENTIMENT_GRADE")]
  pub twitter_sentiment_grade: Option<f64>,

  #[serde(rename = "TWITTER_SENTIMENT_LABEL")]
  pub twitter_sentiment_label: Option<String>,

  #[serde(rename = "TWITTER_SUMMARY")]
  pub twitter_summary: Option<String>,
}

crate::common::impl_dated!(Sentiment, datetime);

#[cfg(test)]
mod tests {
  use super::*;
  use tm_core::test_utils::assert_some_approx;

  #[test]
  fn test_sentiment_row() {
    let json = r#"{"DATETIME": "2025-02-21T15:00:00.000Z", "MARKET_SENTIMENT_GRADE": 56.78, "MARKET_SENTIMENT_LABEL": "neutral", "NEWS_SENTIMENT_GRADE": 54, "NEWS_SENTIMENT_LABEL": "neutral", "NEWS_SUMMARY": "In the cryptocurrency markets this week, several key develop...", "REDDIT_SENTIMENT_GRADE": 52.3, "REDDIT_SENTIMENT_LABEL": "neutral", "REDDIT_SUMMARY": "In the latest news related to the cryptocurrency markets, se...", "TWITTER_SENTIMENT_GRADE": 12.11, "TWITTER_SENTIMENT_LABEL": "very negative", "TWITTER_SUMMARY": "The cryptocurrency markets have been buzzing with activity, ..."}"#;
    let row: Sentiment = serde_json::from_str(json).unwrap();
    assert_some_approx(row.news_sentiment_grade, 54.0);
    assert_eq!(row.twitter_sentiment_label.as_deref(), Some("very negative"));
    assert_eq!(row.date().unwrap().to_string(), "2025-02-21");
  }
}
