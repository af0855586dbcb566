//! TMAI chat assistant

use super::{impl_endpoint_base, EndpointBase, SharedRateLimiter};
use crate::transport::Transport;
use std::sync::Arc;
use tm_core::{Endpoint, Error, Result};
use tm_models::{ChatRequest, ChatResponse};
use tracing::{debug, instrument};

/// TMAI endpoints
pub struct AiEndpoints {
  transport: Arc<Transport>,
  rate_limiter: SharedRateLimiter,
}

impl AiEndpoints {
  /// Create a new AI endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: SharedRateLimiter) -> Self {
    Self { transport, rate_limiter }
  }

  /// Send a conversation to TMAI
  ///
  /// The last message is the question being asked; earlier ones give context.
  #[instrument(skip(self, request), fields(messages = request.messages.len()))]
  pub async fn tmai(&self, request: &ChatRequest) -> Result<ChatResponse> {
    request.validate()?;
    self.wait_for_rate_limit().await?;
    self.transport.post_json(Endpoint::Tmai, request).await
  }

  /// Ask a single question and return only the answer text
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use tm_client::TokenMetricsClient;
  /// # async fn run(client: TokenMetricsClient) -> tm_client::Result<()> {
  /// let answer = client.ai().ask("What is the next 100x coin ?").await?;
  /// println!("{}", answer);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, question))]
  pub async fn ask(&self, question: &str) -> Result<String> {
    let response = self.tmai(&ChatRequest::ask(question)).await?;
    debug!("TMAI thread has {} messages", response.thread.len());
    response.answer.ok_or_else(|| Error::Parse(format!("TMAI returned no answer: {}", response.message)))
  }
}

impl_endpoint_base!(AiEndpoints);
