// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Aura integration tests.
//!
//! Deterministic doubles for the adapter traits so dispatcher tests run
//! without network access or a database.
//!
//! - [`MockProvider`] - scripted completion outcomes with a call counter
//! - [`MemoryStore`] - in-memory usage store, optionally failing

pub mod memory_store;
pub mod mock_provider;

pub use memory_store::MemoryStore;
pub use mock_provider::{MockOutcome, MockProvider};
