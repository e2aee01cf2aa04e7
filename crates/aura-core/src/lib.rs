// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Aura.
//!
//! This crate provides the error type, the request/response types and the
//! adapter traits shared by the rest of the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AuraError;
pub use traits::{ProviderAdapter, UsageStore};
pub use types::{
    CompletionRequest, CompletionResult, LedgerSnapshot, ProviderRequest, ProviderResponse,
    SamplingParams, TokenUsage, UsageRecord,
};
