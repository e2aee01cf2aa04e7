// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire a [`Dispatcher`] from configuration.

use std::sync::Arc;

use aura_config::model::{AuraConfig, CostConfig};
use aura_core::{AuraError, ProviderAdapter, UsageStore};
use aura_cost::{SqliteUsageStore, UsageLedger};
use aura_openai::OpenAiProvider;
use aura_router::FamilyTable;
use tracing::{info, warn};

use crate::dispatcher::Dispatcher;
use crate::persona::Persona;

/// Build the dispatcher described by `config`.
///
/// `cli_key` and `model_override` take precedence over the config file.
/// A usage database that cannot be opened is logged and skipped; the ledger
/// then starts empty and lives in memory only.
pub async fn build_dispatcher(
    config: &AuraConfig,
    cli_key: Option<&str>,
    model_override: Option<&str>,
) -> Result<Dispatcher, AuraError> {
    let provider = OpenAiProvider::from_config(&config.openai, cli_key)?
        .map(|p| Arc::new(p) as Arc<dyn ProviderAdapter>);

    let store: Option<Arc<dyn UsageStore>> = if config.cost.persist {
        match SqliteUsageStore::open(&config.cost.database_path).await {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                warn!(error = %e, "usage store unavailable, continuing without persistence");
                None
            }
        }
    } else {
        info!("usage persistence disabled by configuration");
        None
    };

    let ledger = match &store {
        Some(store) => restore_ledger(store.as_ref(), &config.cost).await,
        None => UsageLedger::new(&config.cost),
    };

    let persona = Persona::from_config(&config.agent).await;
    let model = model_override
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(config.openai.model.as_str());

    let mut dispatcher = Dispatcher::new(provider, ledger, persona, model)
        .with_families(FamilyTable::new(&config.routing));
    if let Some(store) = store {
        dispatcher = dispatcher.with_store(store);
    }
    Ok(dispatcher)
}

/// Ledger from the last saved snapshot, or empty when there is none.
pub async fn restore_ledger(store: &dyn UsageStore, config: &CostConfig) -> UsageLedger {
    match store.load().await {
        Ok(Some(snapshot)) => {
            info!(
                spent = snapshot.cumulative_cost,
                calls = snapshot.call_count,
                reset_date = %snapshot.reset_date,
                "usage ledger restored"
            );
            UsageLedger::from_snapshot(snapshot, config.daily_budget_usd)
        }
        Ok(None) => UsageLedger::new(config),
        Err(e) => {
            warn!(error = %e, "failed to load usage snapshot, starting empty");
            UsageLedger::new(config)
        }
    }
}
