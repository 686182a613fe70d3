//! Canned completion driver for workbench tests.

#![allow(dead_code)]

use async_trait::async_trait;
use promptcraft::{
    CompletionDriver, CompletionError, CompletionErrorKind, CompletionRequest, PromptcraftResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same text, or the same failure, for every call.
pub struct CannedDriver {
    reply: Result<String, CompletionErrorKind>,
    calls: AtomicUsize,
}

impl CannedDriver {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with `kind`.
    pub fn failing(kind: CompletionErrorKind) -> Self {
        Self {
            reply: Err(kind),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionDriver for CannedDriver {
    async fn complete(&self, _req: &CompletionRequest) -> PromptcraftResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(CompletionError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-model"
    }
}

/// Three-variant JSON with distinct positives.
pub fn variants_json() -> String {
    r#"{"balanced":{"positive":"steady","negative":"blur"},"creative":{"positive":"wild","negative":"blur"},"artistic":{"positive":"painted","negative":"blur"}}"#
        .to_string()
}
