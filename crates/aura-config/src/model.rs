// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Aura.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Aura configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuraConfig {
    /// Persona and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Chat-completion endpoint settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Daily cost cap and usage persistence.
    #[serde(default)]
    pub cost: CostConfig,

    /// Model family table.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Persona and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline persona prompt. Overridden by `persona_prompt_file` if both set.
    #[serde(default)]
    pub persona_prompt: Option<String>,

    /// Path to a markdown file containing the persona prompt.
    #[serde(default)]
    pub persona_prompt_file: Option<String>,

    /// Replacement for the built-in company profile block.
    #[serde(default)]
    pub company_context: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            persona_prompt: None,
            persona_prompt_file: None,
            company_context: None,
        }
    }
}

fn default_agent_name() -> String {
    "aura".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` falls back to the `OPENAI_API_KEY` environment variable;
    /// with neither set the assistant runs in offline mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the API; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for completions.
    #[serde(default = "default_model")]
    pub model: String,

    /// Transport timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Cost cap and usage persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CostConfig {
    /// Daily spending cap in USD. Calls are blocked once spend reaches it.
    #[serde(default = "default_daily_budget_usd")]
    pub daily_budget_usd: f64,

    /// Persist the usage ledger so the cap survives restarts.
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Path to the SQLite usage database.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            daily_budget_usd: default_daily_budget_usd(),
            persist: default_persist(),
            database_path: default_database_path(),
        }
    }
}

fn default_daily_budget_usd() -> f64 {
    1.0
}

fn default_persist() -> bool {
    true
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("aura").join("usage.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("aura-usage.db"))
        .to_string_lossy()
        .into_owned()
}

/// Model family configuration.
///
/// Models whose identifier starts with one of `reasoning_prefixes` get the
/// reasoning budget and no temperature; all others get the standard budget
/// and `standard_temperature`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Identifier prefixes of the reasoning model family.
    #[serde(default = "default_reasoning_prefixes")]
    pub reasoning_prefixes: Vec<String>,

    /// Max output tokens for reasoning models. Must exceed `standard_max_tokens`.
    #[serde(default = "default_reasoning_max_tokens")]
    pub reasoning_max_tokens: u32,

    /// Max output tokens for all other models.
    #[serde(default = "default_standard_max_tokens")]
    pub standard_max_tokens: u32,

    /// Sampling temperature for non-reasoning models.
    #[serde(default = "default_standard_temperature")]
    pub standard_temperature: f32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            reasoning_prefixes: default_reasoning_prefixes(),
            reasoning_max_tokens: default_reasoning_max_tokens(),
            standard_max_tokens: default_standard_max_tokens(),
            standard_temperature: default_standard_temperature(),
        }
    }
}

fn default_reasoning_prefixes() -> Vec<String> {
    vec!["o1".to_string()]
}

fn default_reasoning_max_tokens() -> u32 {
    4000
}

fn default_standard_max_tokens() -> u32 {
    3000
}

fn default_standard_temperature() -> f32 {
    0.7
}
