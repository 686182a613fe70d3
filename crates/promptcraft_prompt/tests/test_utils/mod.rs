//! Mock completion driver for orchestrator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use promptcraft_core::CompletionRequest;
use promptcraft_error::{
    CompletionError, CompletionErrorKind, ConfigError, PromptcraftResult,
};
use promptcraft_interface::{CompletionDriver, Vision};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Completion text
    Success(String),
    /// Remote or transport failure
    Error(CompletionErrorKind),
    /// Credential failure
    Config(String),
}

/// Scripted driver that records every request it receives.
///
/// Responses are assigned in call order. When gated, the first call waits
/// for the gate before returning, so later calls can overtake it.
pub struct MockDriver {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    gate: Option<Arc<Notify>>,
}

impl MockDriver {
    /// Driver that answers every call with the same text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Driver that fails every call with the same error.
    pub fn new_error(error: CompletionErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Driver that plays `responses` in order, repeating the last one.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Holds the first call until `gate` is notified.
    pub fn gated_first(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn respond(&self, req: &CompletionRequest) -> PromptcraftResult<String> {
        let (index, response) = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            let mut responses = self.responses.lock().unwrap();
            let response = if responses.len() > 1 {
                responses.pop_front()
            } else {
                responses.front().cloned()
            };
            (requests.len() - 1, response)
        };

        if index == 0 {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }

        match response {
            Some(MockResponse::Success(text)) => Ok(text),
            Some(MockResponse::Error(kind)) => Err(CompletionError::new(kind).into()),
            Some(MockResponse::Config(message)) => Err(ConfigError::new(message).into()),
            None => Err(CompletionError::new(CompletionErrorKind::EmptyResponse(
                "mock".to_string(),
            ))
            .into()),
        }
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, req: &CompletionRequest) -> PromptcraftResult<String> {
        self.respond(req).await
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

#[async_trait]
impl Vision for MockDriver {
    async fn complete_vision(&self, req: &CompletionRequest) -> PromptcraftResult<String> {
        self.respond(req).await
    }

    fn vision_model_name(&self) -> &str {
        "mock-vision"
    }
}

/// A well-formed three-variant response.
pub fn variants_json(balanced: &str, creative: &str, artistic: &str) -> String {
    serde_json::json!({
        "balanced": {"positive": balanced, "negative": "blur"},
        "creative": {"positive": creative, "negative": "blur"},
        "artistic": {"positive": artistic, "negative": "blur"},
    })
    .to_string()
}
