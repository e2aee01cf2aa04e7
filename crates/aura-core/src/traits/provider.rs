// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for chat-completion endpoints.

use async_trait::async_trait;

use crate::error::AuraError;
use crate::types::{ProviderRequest, ProviderResponse};

/// Adapter for a remote chat-completion endpoint.
///
/// Implementations perform exactly one outbound attempt per call. Failures
/// are reported as [`AuraError::Transport`] (the endpoint could not be
/// reached or its body could not be read) or [`AuraError::Api`] (the
/// endpoint answered with an error status).
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AuraError>;
}
