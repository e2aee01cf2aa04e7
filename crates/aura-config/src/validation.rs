// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: a non-negative cap,
//! a usable endpoint URL, sane sampling parameters.

use crate::diagnostic::ConfigError;
use crate::model::AuraConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &AuraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let cap = config.cost.daily_budget_usd;
    if !cap.is_finite() || cap < 0.0 {
        fail(format!(
            "cost.daily_budget_usd must be a non-negative number, got {cap}"
        ));
    }

    if config.cost.persist && config.cost.database_path.trim().is_empty() {
        fail("cost.database_path must not be empty when cost.persist is enabled".to_string());
    }

    let base_url = config.openai.base_url.trim();
    if base_url.is_empty() {
        fail("openai.base_url must not be empty".to_string());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        fail(format!(
            "openai.base_url `{base_url}` must start with http:// or https://"
        ));
    }

    if config.openai.model.trim().is_empty() {
        fail("openai.model must not be empty".to_string());
    }

    if config.openai.timeout_secs == 0 {
        fail("openai.timeout_secs must be at least 1".to_string());
    }

    let routing = &config.routing;
    if routing.reasoning_max_tokens == 0 {
        fail("routing.reasoning_max_tokens must be at least 1".to_string());
    }
    if routing.standard_max_tokens == 0 {
        fail("routing.standard_max_tokens must be at least 1".to_string());
    }
    if routing.reasoning_max_tokens <= routing.standard_max_tokens {
        fail(format!(
            "routing.reasoning_max_tokens ({}) must be larger than routing.standard_max_tokens ({})",
            routing.reasoning_max_tokens, routing.standard_max_tokens
        ));
    }
    if !(0.0..=2.0).contains(&routing.standard_temperature) {
        fail(format!(
            "routing.standard_temperature must be between 0.0 and 2.0, got {}",
            routing.standard_temperature
        ));
    }
    if routing
        .reasoning_prefixes
        .iter()
        .any(|p| p.trim().is_empty())
    {
        fail("routing.reasoning_prefixes must not contain empty entries".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
