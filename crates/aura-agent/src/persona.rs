// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persona and company-context prompts.

use aura_config::model::AgentConfig;
use tracing::{info, warn};

/// Built-in system prompt: Aura, strategic co-founder of WeWine.app.
pub const DEFAULT_PERSONA: &str = include_str!("../assets/persona.md");

/// Built-in company profile prepended to every user prompt.
pub const DEFAULT_COMPANY_CONTEXT: &str = include_str!("../assets/company_context.md");

/// System prompt for the multi-agent team analysis.
pub const TEAM_PERSONA: &str = include_str!("../assets/team_persona.md");

/// The fixed prompts sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub prompt: String,
    pub company_context: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PERSONA.trim().to_string(),
            company_context: DEFAULT_COMPANY_CONTEXT.trim().to_string(),
        }
    }
}

impl Persona {
    /// Resolve the persona from `[agent]`.
    ///
    /// Prompt priority: `persona_prompt_file` > `persona_prompt` > built-in.
    /// An unreadable or empty file falls through to the next source.
    pub async fn from_config(config: &AgentConfig) -> Self {
        let prompt = load_persona_prompt(
            config.persona_prompt.as_deref(),
            config.persona_prompt_file.as_deref(),
        )
        .await;
        let company_context = config
            .company_context
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMPANY_CONTEXT.trim())
            .to_string();

        Self {
            prompt,
            company_context,
        }
    }
}

async fn load_persona_prompt(inline: Option<&str>, file: Option<&str>) -> String {
    if let Some(path) = file {
        match tokio::fs::read_to_string(path).await {
            Ok(content) if !content.trim().is_empty() => {
                info!(path, "loaded persona prompt from file");
                return content.trim().to_string();
            }
            Ok(_) => warn!(path, "persona prompt file is empty, falling back"),
            Err(e) => warn!(path, error = %e, "failed to read persona prompt file, falling back"),
        }
    }

    if let Some(prompt) = inline
        && !prompt.trim().is_empty()
    {
        return prompt.trim().to_string();
    }

    DEFAULT_PERSONA.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persona_is_aura() {
        let persona = Persona::default();
        assert!(persona.prompt.starts_with("You are \"Aura,\""));
        assert!(persona.company_context.starts_with("COMPANY PROFILE: WeWine.app"));
        assert!(persona.company_context.contains("Customer CAC: $25.30"));
    }

    #[test]
    fn team_persona_lists_agents() {
        for agent in ["CEO Agent", "Market Research Agent", "CFO Agent", "Brand Agent"] {
            assert!(TEAM_PERSONA.contains(agent), "missing {agent}");
        }
    }

    #[tokio::test]
    async fn inline_overrides_default() {
        let prompt = load_persona_prompt(Some("Custom persona."), None).await;
        assert_eq!(prompt, "Custom persona.");
    }

    #[tokio::test]
    async fn file_overrides_inline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.md");
        std::fs::write(&path, "File persona.\n").unwrap();

        let prompt =
            load_persona_prompt(Some("Inline persona."), Some(path.to_str().unwrap())).await;
        assert_eq!(prompt, "File persona.");
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_inline() {
        let prompt =
            load_persona_prompt(Some("Inline persona."), Some("/nonexistent/persona.md")).await;
        assert_eq!(prompt, "Inline persona.");
    }

    #[tokio::test]
    async fn config_company_context_replaces_default() {
        let config = AgentConfig {
            company_context: Some("COMPANY PROFILE: Test Co".into()),
            ..AgentConfig::default()
        };
        let persona = Persona::from_config(&config).await;
        assert_eq!(persona.company_context, "COMPANY PROFILE: Test Co");
        assert_eq!(persona.prompt, DEFAULT_PERSONA.trim());
    }
}
