//! Request and response bodies of the `/v2/tmai` chat endpoint

use serde::{Deserialize, Serialize};
use tm_core::{Error, Result};

/// One user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub user: String,
}

impl ChatMessage {
  pub fn new(user: impl Into<String>) -> Self {
    Self { user: user.into() }
  }
}

/// Body POSTed to `/v2/tmai`
///
/// ```json
/// { "messages": [ { "user": "What is the next 100x coin ?" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
  pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
  /// Single question conversation
  pub fn ask(question: impl Into<String>) -> Self {
    Self { messages: vec![ChatMessage::new(question)] }
  }

  /// Continue a conversation: earlier user turns followed by the new question
  pub fn with_history<I, S>(history: I, question: impl Into<String>) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut messages: Vec<ChatMessage> = history.into_iter().map(ChatMessage::new).collect();
    messages.push(ChatMessage::new(question));
    Self { messages }
  }

  pub fn validate(&self) -> Result<()> {
    if self.messages.is_empty() {
      return Err(Error::invalid("messages", "at least one message is required"));
    }
    if self.messages.iter().any(|m| m.user.trim().is_empty()) {
      return Err(Error::invalid("messages", "messages must not be blank"));
    }
    Ok(())
  }
}

/// Chat answer with the thread it answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
  pub success: bool,

  #[serde(default)]
  pub message: String,

  #[serde(default)]
  pub answer: Option<String>,

  #[serde(default)]
  pub thread: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_body() {
    let body = serde_json::to_string(&ChatRequest::ask("What is the next 100x coin ?")).unwrap();
    assert_eq!(body, r#"{"messages":[{"user":"What is the next 100x coin ?"}]}"#);
  }

  #[test]
  fn test_history_order() {
    let req = ChatRequest::with_history(["What is BTC?"], "And ETH?");
    assert_eq!(req.messages.len(), 2);
    assert_eq!(req.messages[1].user, "And ETH?");
  }

  #[test]
  fn test_validate() {
    assert!(ChatRequest::default().validate().is_err());
    assert!(ChatRequest::ask("  ").validate().is_err());
    assert!(ChatRequest::ask("price of eth").validate().is_ok());
  }

  #[test]
  fn test_response() {
    let json = r#"{"success": true, "message": "AI Chatbot response successful", "answer": "Predicting the next 100x coin is speculative, but some proje...", "thread": [{"user": "What is the next 100x coin ?"}]}"#;
    let resp: ChatResponse = serde_json::from_str(json).unwrap();
    assert!(resp.answer.unwrap().starts_with("Predicting"));
    assert_eq!(resp.thread[0].user, "What is the next 100x coin ?");
  }
}
