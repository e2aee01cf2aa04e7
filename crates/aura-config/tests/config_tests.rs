// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Aura configuration system.

use std::io::Write;

use aura_config::diagnostic::ConfigError;
use aura_config::model::AuraConfig;
use aura_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;

#[test]
fn valid_toml_deserializes_into_aura_config() {
    let toml = r#"
[agent]
name = "wewine-aura"
log_level = "debug"
persona_prompt = "You are a helpful analyst."

[openai]
api_key = "sk-test"
base_url = "http://localhost:8080/v1"
model = "o1-mini"
timeout_secs = 30

[cost]
daily_budget_usd = 2.5
persist = false

[routing]
reasoning_prefixes = ["o1", "o3"]
standard_temperature = 0.2
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "wewine-aura");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(
        config.agent.persona_prompt.as_deref(),
        Some("You are a helpful analyst.")
    );
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai.base_url, "http://localhost:8080/v1");
    assert_eq!(config.openai.model, "o1-mini");
    assert_eq!(config.openai.timeout_secs, 30);
    assert_eq!(config.cost.daily_budget_usd, 2.5);
    assert!(!config.cost.persist);
    assert_eq!(config.routing.reasoning_prefixes, vec!["o1", "o3"]);
    assert_eq!(config.routing.standard_temperature, 0.2);
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.agent.name, "aura");
    assert_eq!(config.openai.model, "gpt-4");
    assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.cost.daily_budget_usd, 1.0);
    assert!(config.cost.persist);
    assert_eq!(config.routing.reasoning_prefixes, vec!["o1"]);
    assert_eq!(config.routing.reasoning_max_tokens, 4000);
    assert_eq!(config.routing.standard_max_tokens, 3000);
}

#[test]
fn env_style_override_wins_over_file() {
    let config: AuraConfig = Figment::new()
        .merge(Serialized::defaults(AuraConfig::default()))
        .merge(Toml::string("[openai]\nmodel = \"gpt-4\"\n"))
        .merge(("openai.model", "gpt-3.5-turbo"))
        .merge(("cost.daily_budget_usd", 5.0))
        .extract()
        .expect("should merge override");
    assert_eq!(config.openai.model, "gpt-3.5-turbo");
    assert_eq!(config.cost.daily_budget_usd, 5.0);
}

#[test]
fn missing_config_files_silently_skipped() {
    let config: AuraConfig = Figment::new()
        .merge(Serialized::defaults(AuraConfig::default()))
        .merge(Toml::file("/nonexistent/path/aura.toml"))
        .extract()
        .expect("missing file should be skipped");
    assert_eq!(config.openai.model, "gpt-4");
}

#[test]
fn unknown_key_in_section_suggests_correction() {
    let toml = r#"
[openai]
modle = "gpt-4"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    let found = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "modle" && suggestion.as_deref() == Some("model")
        )
    });
    assert!(found, "expected unknown key with suggestion, got: {errors:?}");
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let toml = r#"
[telegram]
bot_token = "abc"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "telegram")));
}

#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[cost]
daily_budget_usd = "one dollar"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}

#[test]
fn validation_runs_after_parsing() {
    let toml = r#"
[cost]
daily_budget_usd = -1.0
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("daily_budget_usd")
    )));
}

#[test]
fn config_error_renders_with_miette() {
    let errors = load_and_validate_str("[agent]\nnaem = \"x\"\n").unwrap_err();
    let handler = miette::GraphicalReportHandler::new();
    let mut out = String::new();
    handler
        .render_report(&mut out, &errors[0])
        .expect("render should succeed");
    assert!(out.contains("naem"));
    assert!(out.contains("name"));
}

#[test]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[openai]\nmodel = \"gpt-4-turbo\"\n[cost]\npersist = false").unwrap();

    let config = load_and_validate_path(file.path()).expect("file config should load");
    assert_eq!(config.openai.model, "gpt-4-turbo");
    assert!(!config.cost.persist);
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let errors = load_and_validate_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(
        &errors[..],
        [ConfigError::Other(msg)] if msg.contains("config file not found")
    ));
}
