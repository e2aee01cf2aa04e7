// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model families and their request parameters.
//!
//! Reasoning models take a smaller output budget and reject a temperature;
//! every other model gets the standard budget and temperature. Family
//! membership is an ordered prefix table from `[routing]`.

use aura_config::model::RoutingConfig;
use aura_core::SamplingParams;
use strum::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ModelFamily {
    Reasoning,
    Standard,
}

/// Prefix table mapping model identifiers to families.
#[derive(Debug, Clone)]
pub struct FamilyTable {
    reasoning_prefixes: Vec<String>,
    reasoning_max_tokens: u32,
    standard_max_tokens: u32,
    standard_temperature: f32,
}

impl Default for FamilyTable {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

impl FamilyTable {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            reasoning_prefixes: config.reasoning_prefixes.clone(),
            reasoning_max_tokens: config.reasoning_max_tokens,
            standard_max_tokens: config.standard_max_tokens,
            standard_temperature: config.standard_temperature,
        }
    }

    /// Family of `model`: the first matching prefix wins, otherwise `Standard`.
    pub fn family_of(&self, model: &str) -> ModelFamily {
        if self
            .reasoning_prefixes
            .iter()
            .any(|prefix| model.starts_with(prefix.as_str()))
        {
            ModelFamily::Reasoning
        } else {
            ModelFamily::Standard
        }
    }

    /// Sampling parameters to send with a request for `model`.
    pub fn params_for(&self, model: &str) -> SamplingParams {
        let family = self.family_of(model);
        let params = match family {
            ModelFamily::Reasoning => SamplingParams {
                max_tokens: self.reasoning_max_tokens,
                temperature: None,
            },
            ModelFamily::Standard => SamplingParams {
                max_tokens: self.standard_max_tokens,
                temperature: Some(self.standard_temperature),
            },
        };
        debug!(model, %family, max_tokens = params.max_tokens, "sampling parameters selected");
        params
    }
}
