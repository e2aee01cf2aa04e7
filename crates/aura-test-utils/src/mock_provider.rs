// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! Outcomes are popped from a FIFO queue; an empty queue answers with
//! "mock response" and no usage. Clones share state, so a test can keep one
//! handle for assertions after moving another into the dispatcher.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use aura_core::{AuraError, ProviderAdapter, ProviderRequest, ProviderResponse, TokenUsage};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Reply {
        content: String,
        usage: Option<TokenUsage>,
    },
    /// Connection-level failure.
    Transport(String),
    /// Non-success HTTP status.
    Api { status: u16, message: String },
}

impl MockOutcome {
    pub fn reply(content: impl Into<String>, prompt_tokens: u32, completion_tokens: u32) -> Self {
        MockOutcome::Reply {
            content: content.into(),
            usage: Some(TokenUsage {
                prompt_tokens,
                completion_tokens,
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
    delay: Option<Duration>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            ..Self::default()
        }
    }

    /// Sleep for `delay` inside every call, to widen race windows.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls that reached the transport.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AuraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let model = request.model.clone();
        self.requests.lock().await.push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self.outcomes.lock().await.pop_front();
        match outcome {
            Some(MockOutcome::Reply { content, usage }) => Ok(ProviderResponse {
                content,
                model,
                usage,
            }),
            Some(MockOutcome::Transport(message)) => Err(AuraError::Transport {
                message,
                source: None,
            }),
            Some(MockOutcome::Api { status, message }) => Err(AuraError::Api { status, message }),
            None => Ok(ProviderResponse {
                content: "mock response".to_string(),
                model,
                usage: None,
            }),
        }
    }
}
