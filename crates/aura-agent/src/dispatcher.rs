// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost-gated completion dispatcher with keyword-based offline fallback.
//!
//! Every branch ends in a [`CompletionResult`]; the dispatcher never returns
//! an error. The ledger lock is held from the gate check until the cost is
//! recorded, so concurrent dispatches cannot both pass a nearly spent gate.

use std::sync::Arc;

use aura_core::{
    AuraError, CompletionRequest, CompletionResult, LedgerSnapshot, ProviderAdapter, UsageRecord,
    UsageStore,
};
use aura_cost::{estimate_usage_cost, UsageLedger};
use aura_router::{classify, FamilyTable};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::persona::Persona;

/// Usage figures for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    #[serde(flatten)]
    pub snapshot: LedgerSnapshot,
    pub daily_cap: f64,
    pub remaining: f64,
    /// Spend as a fraction of the cap, in `[0, 1]`.
    pub utilization: f64,
    /// Whether a credential is configured.
    pub online: bool,
}

pub struct Dispatcher {
    /// `None` when no credential is configured (offline mode).
    provider: Option<Arc<dyn ProviderAdapter>>,
    ledger: Arc<Mutex<UsageLedger>>,
    store: Option<Arc<dyn UsageStore>>,
    families: FamilyTable,
    persona: Persona,
    model: String,
}

impl Dispatcher {
    pub fn new(
        provider: Option<Arc<dyn ProviderAdapter>>,
        ledger: UsageLedger,
        persona: Persona,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            ledger: Arc::new(Mutex::new(ledger)),
            store: None,
            families: FamilyTable::default(),
            persona,
            model: model.into(),
        }
    }

    /// Mirror ledger changes to `store`.
    pub fn with_store(mut self, store: Arc<dyn UsageStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_families(mut self, families: FamilyTable) -> Self {
        self.families = families;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer `user_prompt`, through the model when possible.
    ///
    /// `persona_override` replaces the system prompt for this call only.
    pub async fn dispatch(
        &self,
        user_prompt: &str,
        persona_override: Option<&str>,
    ) -> CompletionResult {
        let Some(provider) = &self.provider else {
            let category = classify(user_prompt);
            info!(%category, "no credential configured, serving offline analysis");
            return CompletionResult::Success(category.document().to_string());
        };

        let mut ledger = self.ledger.lock().await;
        if !ledger.check_gate() {
            warn!(
                spent = ledger.cumulative_cost(),
                daily_cap = ledger.daily_cap(),
                "daily cost cap reached, call blocked"
            );
            return CompletionResult::Blocked(format!(
                "daily cost limit reached (${:.2})",
                ledger.daily_cap()
            ));
        }

        let request = CompletionRequest {
            persona_prompt: persona_override
                .unwrap_or(self.persona.prompt.as_str())
                .to_string(),
            user_prompt: user_prompt.to_string(),
            company_context: self.persona.company_context.clone(),
            model: self.model.clone(),
        };
        let params = self.families.params_for(&self.model);

        match provider.complete(request.to_provider_request(params)).await {
            Ok(response) => {
                match response.usage {
                    Some(usage) => {
                        let cost = estimate_usage_cost(&usage, &self.model);
                        ledger.record(cost);
                        info!(
                            model = %self.model,
                            cost_usd = cost,
                            daily_total = ledger.cumulative_cost(),
                            calls = ledger.call_count(),
                            "completion cost recorded"
                        );
                        let record = UsageRecord::new(&self.model, &usage, cost);
                        self.persist(&ledger, Some(record)).await;
                    }
                    None => debug!("response carried no usage, ledger unchanged"),
                }
                CompletionResult::Success(response.content)
            }
            Err(AuraError::Api { status, message }) => {
                warn!(status, %message, "completion endpoint returned an error");
                CompletionResult::ApiError { status, message }
            }
            Err(err) => {
                let message = match err {
                    AuraError::Transport { message, .. } => message,
                    other => other.to_string(),
                };
                warn!(%message, "completion call failed, serving offline analysis");
                CompletionResult::TransportError {
                    message,
                    fallback: classify(user_prompt).document().to_string(),
                }
            }
        }
    }

    /// Current usage, after applying any pending daily rollover.
    pub async fn usage(&self) -> UsageReport {
        let mut ledger = self.ledger.lock().await;
        if ledger.roll_over_if_stale() {
            self.persist(&ledger, None).await;
        }
        UsageReport {
            snapshot: ledger.snapshot(),
            daily_cap: ledger.daily_cap(),
            remaining: ledger.remaining(),
            utilization: ledger.utilization(),
            online: self.is_online(),
        }
    }

    /// Zero today's usage by hand.
    pub async fn reset_usage(&self) -> LedgerSnapshot {
        let mut ledger = self.ledger.lock().await;
        ledger.reset();
        info!("usage reset");
        self.persist(&ledger, None).await;
        ledger.snapshot()
    }

    /// Store failures are logged and otherwise ignored.
    async fn persist(&self, ledger: &UsageLedger, record: Option<UsageRecord>) {
        let Some(store) = &self.store else {
            return;
        };
        if let Some(record) = record
            && let Err(e) = store.append(&record).await
        {
            warn!(error = %e, "failed to append usage record");
        }
        if let Err(e) = store.save(&ledger.snapshot()).await {
            warn!(error = %e, "failed to save usage snapshot");
        }
    }
}
