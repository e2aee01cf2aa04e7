// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./aura.toml` > `~/.config/aura/aura.toml` > `/etc/aura/aura.toml`
//! with environment variable overrides via `AURA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AuraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/aura/aura.toml` (system-wide)
/// 3. `~/.config/aura/aura.toml` (user XDG config)
/// 4. `./aura.toml` (local directory)
/// 5. `AURA_*` environment variables
pub fn load_config() -> Result<AuraConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AuraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AuraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AuraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AuraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for XDG config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AuraConfig::default()))
        .merge(Toml::file("/etc/aura/aura.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("aura/aura.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("aura.toml"))
        .merge(env_provider())
}

/// Environment provider mapping `AURA_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `AURA_OPENAI_API_KEY` must become `openai.api_key`, not
/// `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("AURA_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    key.replacen("agent_", "agent.", 1)
        .replacen("openai_", "openai.", 1)
        .replacen("cost_", "cost.", 1)
        .replacen("routing_", "routing.", 1)
}
