// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `aura models` command implementation.

use aura_config::model::AuraConfig;
use aura_cost::{PriceTable, get_pricing};
use aura_router::FamilyTable;

/// Models offered for `--model`. Any other raw id is accepted too.
pub const SELECTABLE_MODELS: &[&str] = &[
    "gpt-4",
    "gpt-4-turbo-preview",
    "gpt-3.5-turbo",
    "o1-preview",
    "o1-mini",
];

fn model_line(model: &str, families: &FamilyTable, configured: &str) -> String {
    let pricing = get_pricing(model);
    let marker = if model == configured { "*" } else { " " };
    let note = if PriceTable::contains(model) {
        ""
    } else {
        " (default pricing)"
    };
    format!(
        "  {marker} {model:<20} {family:<10} ${input:.4} / ${output:.4} per 1K tokens{note}",
        family = families.family_of(model).to_string(),
        input = pricing.input_per_ktok,
        output = pricing.output_per_ktok,
    )
}

pub fn print_models(config: &AuraConfig) {
    let families = FamilyTable::new(&config.routing);
    let configured = config.openai.model.as_str();

    println!();
    for model in SELECTABLE_MODELS {
        println!("{}", model_line(model, &families, configured));
    }
    if !SELECTABLE_MODELS.contains(&configured) {
        println!("{}", model_line(configured, &families, configured));
    }
    println!();
    println!("  * configured model; override with --model <id>");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_show_family_and_pricing() {
        let families = FamilyTable::default();
        let line = model_line("o1-mini", &families, "gpt-4");
        assert!(line.contains("reasoning"));
        assert!(line.contains("$0.0030 / $0.0120"));
        assert!(!line.contains('*'));

        let line = model_line("gpt-4", &families, "gpt-4");
        assert!(line.trim_start().starts_with("* gpt-4"));
        assert!(line.contains("standard"));
    }

    #[test]
    fn unpriced_model_is_flagged() {
        let line = model_line("gpt-4-turbo-preview", &FamilyTable::default(), "gpt-4");
        assert!(line.ends_with("(default pricing)"));
        assert!(line.contains("$0.0300 / $0.0600"));
    }
}
