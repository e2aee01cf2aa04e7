// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Aura assistant: persona, analysis prompts and the completion
//! dispatcher.
//!
//! The [`Dispatcher`] is the single entry point for model calls. It serves a
//! canned document when no credential is configured, refuses calls once the
//! daily cap is spent, and records the estimated cost of every call that
//! reports usage.

pub mod analysis;
pub mod bootstrap;
pub mod dispatcher;
pub mod persona;

pub use analysis::Analysis;
pub use bootstrap::{build_dispatcher, restore_ledger};
pub use dispatcher::{Dispatcher, UsageReport};
pub use persona::Persona;
