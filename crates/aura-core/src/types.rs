// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the dispatcher, the cost crate and provider adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Token usage reported by the completion endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Per-model request parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    /// `None` omits the field from the request body.
    pub temperature: Option<f32>,
}

/// A single persona-wrapped completion request.
///
/// Built once per dispatch and dropped when the call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub persona_prompt: String,
    pub user_prompt: String,
    pub company_context: String,
    pub model: String,
}

impl CompletionRequest {
    /// The user-role content: company context followed by the caller's prompt.
    pub fn user_content(&self) -> String {
        format!(
            "{}\n\nUSER PROMPT:\n{}",
            self.company_context, self.user_prompt
        )
    }

    /// Lower into the transport-level request with the given sampling parameters.
    pub fn to_provider_request(&self, params: SamplingParams) -> ProviderRequest {
        ProviderRequest {
            model: self.model.clone(),
            system: self.persona_prompt.clone(),
            user: self.user_content(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

/// A request to an LLM provider: one system message and one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

/// A response from an LLM provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// First choice's message content, verbatim.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Token usage, when the endpoint reports it.
    pub usage: Option<TokenUsage>,
}

/// Outcome of one dispatch. Every variant renders to user-facing markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// Model output, or the canned document in offline mode.
    Success(String),
    /// The daily cost cap was reached; no call was made.
    Blocked(String),
    /// The endpoint could not be reached. `fallback` holds the offline
    /// document for the same prompt.
    TransportError { message: String, fallback: String },
    /// The endpoint rejected the request.
    ApiError { status: u16, message: String },
}

impl CompletionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success(_))
    }

    /// Render the result as markdown for display.
    pub fn render(&self) -> String {
        match self {
            CompletionResult::Success(text) => text.clone(),
            CompletionResult::Blocked(reason) => format!(
                "💰 **{}.** Using offline insights. Upgrade or wait for daily reset.",
                capitalize(reason)
            ),
            CompletionResult::TransportError { message, fallback } => format!(
                "❌ **Connection Error:** {message}\n\nUsing offline strategic framework...\n\n{fallback}"
            ),
            CompletionResult::ApiError { status, message } => {
                format!("❌ **API Error:** HTTP {status}\n\n*Details:* {message}")
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Serializable view of the usage ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub cumulative_cost: f64,
    pub call_count: u64,
    pub reset_date: NaiveDate,
}

/// One billed completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Unique record identifier (UUID v4).
    pub id: String,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub cost_usd: f64,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl UsageRecord {
    pub fn new(model: &str, usage: &TokenUsage, cost_usd: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            model: model.to_string(),
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            cost_usd,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
