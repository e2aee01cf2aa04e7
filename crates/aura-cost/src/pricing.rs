// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model pricing table and cost estimation.
//!
//! Prices are USD per 1000 tokens:
//!
//! | model           | input  | output |
//! |-----------------|--------|--------|
//! | gpt-4 (default) | 0.03   | 0.06   |
//! | gpt-4-turbo     | 0.01   | 0.03   |
//! | gpt-3.5-turbo   | 0.0015 | 0.002  |
//! | o1-preview      | 0.015  | 0.06   |
//! | o1-mini         | 0.003  | 0.012  |
//!
//! These are rough heuristics for enforcing the daily cap, not billing.

use aura_core::TokenUsage;

/// Per-model pricing in USD per 1000 tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_per_ktok: f64,
    pub output_per_ktok: f64,
}

impl ModelPricing {
    const fn new(input_per_ktok: f64, output_per_ktok: f64) -> Self {
        Self {
            input_per_ktok,
            output_per_ktok,
        }
    }
}

/// Identifier whose prices apply to unknown models.
pub const DEFAULT_MODEL: &str = "gpt-4";

const DEFAULT_PRICING: ModelPricing = ModelPricing::new(0.03, 0.06);

const PRICES: &[(&str, ModelPricing)] = &[
    (DEFAULT_MODEL, DEFAULT_PRICING),
    ("gpt-4-turbo", ModelPricing::new(0.01, 0.03)),
    ("gpt-3.5-turbo", ModelPricing::new(0.0015, 0.002)),
    ("o1-preview", ModelPricing::new(0.015, 0.06)),
    ("o1-mini", ModelPricing::new(0.003, 0.012)),
];

/// The static price table.
pub struct PriceTable;

impl PriceTable {
    /// Model identifiers with an explicit entry, default first.
    pub fn models() -> impl Iterator<Item = &'static str> {
        PRICES.iter().map(|(model, _)| *model)
    }

    /// Whether `model` has its own entry (exact match).
    pub fn contains(model: &str) -> bool {
        PRICES.iter().any(|(m, _)| *m == model)
    }
}

/// Look up pricing for a model identifier.
///
/// Exact match only. Unknown identifiers get the default (`gpt-4`) prices so
/// a typo never makes a call look free.
pub fn get_pricing(model: &str) -> ModelPricing {
    PRICES
        .iter()
        .find(|(m, _)| *m == model)
        .map(|(_, pricing)| *pricing)
        .unwrap_or(DEFAULT_PRICING)
}

/// Estimated cost in USD of one call.
///
/// `prompt_tokens / 1000 * input + completion_tokens / 1000 * output`.
pub fn estimate_cost(prompt_tokens: u32, completion_tokens: u32, model: &str) -> f64 {
    let pricing = get_pricing(model);
    let input = f64::from(prompt_tokens) / 1000.0 * pricing.input_per_ktok;
    let output = f64::from(completion_tokens) / 1000.0 * pricing.output_per_ktok;
    input + output
}

/// [`estimate_cost`] over a reported usage block.
pub fn estimate_usage_cost(usage: &TokenUsage, model: &str) -> f64 {
    estimate_cost(usage.prompt_tokens, usage.completion_tokens, model)
}
