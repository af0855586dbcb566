//! HTTP transport layer for Token Metrics API requests

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tm_core::{Config, Endpoint, Error, Result};
use tm_models::{ApiErrorResponse, QueryParams};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Longest slice of a response body copied into logs and errors
const BODY_SNIPPET: usize = 200;

/// HTTP transport layer for making requests to the Token Metrics API
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    Url::parse(&config.base_url).map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("tm-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout: Duration::from_secs(config.timeout_secs),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.tokenmetrics.com".to_string(),
      api_key: "tm-test-key".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// GET a query endpoint
  ///
  /// Parameters the endpoint does not take are dropped with a warning; a
  /// missing required parameter fails before anything is sent.
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, params: QueryParams) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let params = Self::prepare_params(endpoint, params)?;
    let url = self.build_url(endpoint, &params)?;
    debug!("Making request to: {}", url);

    let request = self.authorize(endpoint, self.client.get(url));
    self.execute(endpoint, request).await
  }

  /// POST a JSON body
  #[instrument(skip(self, body), fields(endpoint = %endpoint))]
  pub async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.build_url(endpoint, &QueryParams::new())?;
    debug!("Posting to: {}", url);

    let request = self.authorize(endpoint, self.client.post(url).json(body));
    self.execute(endpoint, request).await
  }

  /// Build the full URL for an API request
  pub(crate) fn build_url(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Keep only the parameters `endpoint` takes and check the required ones
  pub(crate) fn prepare_params(endpoint: Endpoint, mut params: QueryParams) -> Result<QueryParams> {
    let accepted = endpoint.query_params();
    params.retain(|name, _| {
      let keep = accepted.contains(name);
      if !keep {
        warn!("{} does not take `{}`; dropping it", endpoint, name);
      }
      keep
    });

    for required in endpoint.required_params() {
      if !params.contains_key(required) {
        return Err(Error::invalid(*required, format!("is required by {}", endpoint)));
      }
    }

    Ok(params)
  }

  fn authorize(&self, endpoint: Endpoint, request: RequestBuilder) -> RequestBuilder {
    request.header(endpoint.auth_header().as_str(), &self.api_key).header("accept", "application/json")
  }

  async fn execute<T>(&self, endpoint: Endpoint, request: RequestBuilder) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let response = request.send().await.map_err(|e| {
      error!("Request to {} failed: {}", endpoint, e);
      Error::Http(format!("Request failed: {}", e))
    })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with body length: {} bytes", status, text.len());

    Self::check_api_error(status, &text)?;

    match serde_json::from_str::<T>(&text) {
      Ok(data) => {
        info!("Successfully parsed response for {}", endpoint);
        Ok(data)
      }
      Err(e) => {
        error!("Failed to parse JSON response: {}", e);
        error!("Response text (first {} chars): {}", BODY_SNIPPET, snippet(&text));
        Err(Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(&text))))
      }
    }
  }

  /// Map HTTP status and `success: false` bodies onto [`Error`]
  pub(crate) fn check_api_error(status: StatusCode, text: &str) -> Result<()> {
    let vendor_message = || {
      serde_json::from_str::<ApiErrorResponse>(text)
        .ok()
        .map(|body| body.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| snippet(text))
    };

    match status {
      s if s.is_success() => {
        // Some failures come back as 200 with `success: false`
        if let Ok(body) = serde_json::from_str::<serde_json::Value>(text) {
          if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let message =
              body.get("message").and_then(serde_json::Value::as_str).unwrap_or("request unsuccessful");
            warn!("API reported failure: {}", message);
            return Err(Error::Api { status: s.as_u16(), message: message.to_string() });
          }
        }
        Ok(())
      }
      StatusCode::BAD_REQUEST => {
        let message = vendor_message();
        warn!("API rejected the request: {}", message);
        Err(Error::Api { status: 400, message })
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        error!("API key rejected with status {}", status);
        Err(Error::ApiKey(format!("Invalid API key or unauthorized request ({})", vendor_message())))
      }
      StatusCode::TOO_MANY_REQUESTS => {
        warn!("Rate limited by the API");
        Err(Error::RateLimit(vendor_message()))
      }
      s => {
        error!("Request failed with status: {}", s);
        Err(Error::Http(format!("HTTP error: {} {}", s, vendor_message())))
      }
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"<redacted>")
      .field("timeout", &self.timeout)
      .finish()
  }
}

fn snippet(text: &str) -> String {
  text.chars().take(BODY_SNIPPET).collect()
}
