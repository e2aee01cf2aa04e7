// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification and model-family routing for Aura.
//!
//! - [`classify`]: keyword classification of a prompt into a strategy
//!   [`Category`], each with a canned offline document
//! - [`FamilyTable`]: maps a model identifier to its family and the
//!   sampling parameters that family requires

pub mod classifier;
pub mod family;

pub use classifier::{classify, Category};
pub use family::{FamilyTable, ModelFamily};
