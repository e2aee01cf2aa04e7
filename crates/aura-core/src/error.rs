// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Aura.

use thiserror::Error;

/// The error type shared by adapter traits and infrastructure code.
///
/// The dispatcher never surfaces these to its caller: every failure is
/// folded into a [`CompletionResult`](crate::types::CompletionResult).
#[derive(Debug, Error)]
pub enum AuraError {
    /// Configuration errors (missing credential, invalid header value).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Connection-level failure talking to the completion endpoint
    /// (DNS, refused connection, timeout, unreadable or malformed body).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The completion endpoint answered with a non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
