// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat-completions provider adapter for Aura.
//!
//! Implements [`ProviderAdapter`] over a single non-streaming POST to
//! `{base_url}/chat/completions` with bearer authentication.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use aura_config::model::OpenAiConfig;
use aura_core::{AuraError, ProviderAdapter, ProviderRequest, ProviderResponse, TokenUsage};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{ChatCompletionRequest, ChatMessage};

/// Environment variable consulted when no key is given on the command line
/// or in the config file.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Provider for OpenAI-compatible chat-completions endpoints.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    pub fn new(api_key: &SecretString, config: &OpenAiConfig) -> Result<Self, AuraError> {
        let client = OpenAiClient::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;
        info!(
            endpoint = client.endpoint(),
            model = %config.model,
            "chat-completions provider initialized"
        );
        Ok(Self { client })
    }

    /// Build a provider when a credential is available.
    ///
    /// Returns `Ok(None)` when no key is found, which callers treat as
    /// offline mode.
    pub fn from_config(
        config: &OpenAiConfig,
        cli_key: Option<&str>,
    ) -> Result<Option<Self>, AuraError> {
        match resolve_api_key(cli_key, config.api_key.as_deref()) {
            Some(key) => Self::new(&key, config).map(Some),
            None => {
                info!("no API key configured, running in offline mode");
                Ok(None)
            }
        }
    }
}

fn to_chat_request(request: ProviderRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request.model,
        messages: vec![
            ChatMessage::system(request.system),
            ChatMessage::user(request.user),
        ],
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AuraError> {
        let requested_model = request.model.clone();
        let response = self.client.complete_chat(&to_chat_request(request)).await?;

        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        });
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!(
            id = response.id.as_deref().unwrap_or("-"),
            chars = content.len(),
            has_usage = usage.is_some(),
            "completion received"
        );

        Ok(ProviderResponse {
            content,
            model: response.model.unwrap_or(requested_model),
            usage,
        })
    }
}

/// Resolve the API key: CLI override, then config, then `OPENAI_API_KEY`.
///
/// Empty or whitespace-only values count as absent.
pub fn resolve_api_key(cli_key: Option<&str>, config_key: Option<&str>) -> Option<SecretString> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    first_key([cli_key, config_key, env_key.as_deref()])
}

fn first_key<const N: usize>(candidates: [Option<&str>; N]) -> Option<SecretString> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(|k| SecretString::from(k.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn exposed(key: Option<SecretString>) -> Option<String> {
        key.map(|k| k.expose_secret().to_string())
    }

    #[test]
    fn cli_key_wins() {
        let key = first_key([Some("sk-cli"), Some("sk-config"), Some("sk-env")]);
        assert_eq!(exposed(key).as_deref(), Some("sk-cli"));
    }

    #[test]
    fn empty_values_are_skipped() {
        let key = first_key([Some(""), Some("  "), Some("sk-env")]);
        assert_eq!(exposed(key).as_deref(), Some("sk-env"));
    }

    #[test]
    fn no_key_anywhere_is_none() {
        assert!(first_key([None, Some(""), None]).is_none());
    }

    #[test]
    fn explicit_key_resolves_regardless_of_env() {
        let key = resolve_api_key(Some("sk-explicit"), None);
        assert_eq!(exposed(key).as_deref(), Some("sk-explicit"));
    }

    #[test]
    fn chat_request_has_system_then_user() {
        let req = to_chat_request(ProviderRequest {
            model: "gpt-4".into(),
            system: "persona".into(),
            user: "context\n\nUSER PROMPT:\nhi".into(),
            max_tokens: 3000,
            temperature: Some(0.7),
        });
        assert_eq!(req.messages[0], ChatMessage::system("persona"));
        assert_eq!(req.messages[1].role, "user");
        assert_eq!(req.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn provider_maps_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "## Plan"}}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 34}
            })))
            .mount(&server)
            .await;

        let config = OpenAiConfig {
            base_url: server.uri(),
            ..OpenAiConfig::default()
        };
        let provider =
            OpenAiProvider::new(&SecretString::from("sk-test".to_string()), &config).unwrap();
        assert_eq!(provider.name(), "openai");

        let resp = provider
            .complete(ProviderRequest {
                model: "o1-mini".into(),
                system: "s".into(),
                user: "u".into(),
                max_tokens: 2500,
                temperature: None,
            })
            .await
            .unwrap();
        assert_eq!(resp.content, "## Plan");
        assert_eq!(resp.model, "o1-mini");
        assert_eq!(
            resp.usage,
            Some(TokenUsage {
                prompt_tokens: 12,
                completion_tokens: 34
            })
        );
    }

    #[test]
    fn from_config_with_key_builds_provider() {
        let config = OpenAiConfig {
            api_key: Some("sk-config".into()),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::from_config(&config, None).unwrap();
        assert!(provider.is_some());
    }
}
