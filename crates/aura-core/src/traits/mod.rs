// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Both traits use `#[async_trait]` so they can be held as trait objects.

pub mod provider;
pub mod storage;

pub use provider::ProviderAdapter;
pub use storage::UsageStore;
