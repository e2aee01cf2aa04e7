// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for the usage ledger.
//!
//! Two tables: `usage_ledger` holds the single current snapshot (row id 1),
//! `usage_calls` logs every billed call. The schema is created on open.
//! All queries run on the tokio-rusqlite background thread.

use async_trait::async_trait;
use aura_core::{AuraError, LedgerSnapshot, UsageRecord, UsageStore};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, Utc};
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS usage_ledger (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    cumulative_cost REAL NOT NULL DEFAULT 0.0,
    call_count INTEGER NOT NULL DEFAULT 0,
    reset_date TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS usage_calls (
    id TEXT PRIMARY KEY NOT NULL,
    model TEXT NOT NULL,
    prompt_tokens INTEGER NOT NULL DEFAULT 0,
    completion_tokens INTEGER NOT NULL DEFAULT 0,
    cost_usd REAL NOT NULL DEFAULT 0.0,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_usage_calls_created ON usage_calls(created_at);
";

const DATE_FORMAT: &str = "%Y-%m-%d";

fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> AuraError {
    AuraError::Storage {
        source: Box::new(e),
    }
}

/// UTC instants of local midnight at the start of `date` and of the next day.
///
/// A midnight skipped by a DST jump is read as UTC midnight.
pub fn local_day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_of = |d: NaiveDate| {
        let midnight = d.and_time(NaiveTime::MIN);
        midnight
            .and_local_timezone(Local)
            .earliest()
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|| midnight.and_utc())
    };
    let next = date.succ_opt().unwrap_or(date);
    (start_of(date), start_of(next))
}

/// Usage store backed by a SQLite file.
pub struct SqliteUsageStore {
    conn: tokio_rusqlite::Connection,
}

impl SqliteUsageStore {
    /// Open (or create) the database at `path`, creating parent directories
    /// and the schema as needed.
    pub async fn open(path: &str) -> Result<Self, AuraError> {
        if let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| AuraError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| AuraError::Storage {
                source: Box::new(e),
            })?;
        let store = Self::with_connection(conn).await?;
        info!(path, "usage store opened");
        Ok(store)
    }

    /// In-memory store, gone when dropped.
    pub async fn open_in_memory() -> Result<Self, AuraError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| AuraError::Storage {
                source: Box::new(e),
            })?;
        Self::with_connection(conn).await
    }

    async fn with_connection(conn: tokio_rusqlite::Connection) -> Result<Self, AuraError> {
        conn.call(|conn| -> Result<(), rusqlite::Error> {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
        Ok(Self { conn })
    }

    /// Sum of logged call costs made during the local calendar day `date`.
    ///
    /// `created_at` is stored in UTC, so the day is converted to its UTC
    /// bounds and compared with `julianday`, which normalizes offsets.
    pub async fn total_on(&self, date: NaiveDate) -> Result<f64, AuraError> {
        let (start, end) = local_day_bounds(date);
        let start = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        self.conn
            .call(move |conn| -> Result<f64, rusqlite::Error> {
                conn.query_row(
                    "SELECT COALESCE(SUM(cost_usd), 0.0) FROM usage_calls \
                     WHERE julianday(created_at) >= julianday(?1) \
                     AND julianday(created_at) < julianday(?2)",
                    rusqlite::params![start, end],
                    |row| row.get(0),
                )
            })
            .await
            .map_err(map_tr_err)
    }

    /// Number of calls in the log.
    pub async fn call_log_len(&self) -> Result<u64, AuraError> {
        self.conn
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT COUNT(*) FROM usage_calls", [], |row| row.get(0))
            })
            .await
            .map(|n| n.max(0) as u64)
            .map_err(map_tr_err)
    }
}

#[async_trait]
impl UsageStore for SqliteUsageStore {
    async fn load(&self) -> Result<Option<LedgerSnapshot>, AuraError> {
        let row = self
            .conn
            .call(|conn| -> Result<Option<(f64, i64, String)>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT cumulative_cost, call_count, reset_date FROM usage_ledger WHERE id = 1",
                )?;
                let mut rows = stmt.query([])?;
                match rows.next()? {
                    Some(row) => Ok(Some((row.get(0)?, row.get(1)?, row.get(2)?))),
                    None => Ok(None),
                }
            })
            .await
            .map_err(map_tr_err)?;

        let Some((cumulative_cost, call_count, reset_date)) = row else {
            return Ok(None);
        };
        let reset_date =
            NaiveDate::parse_from_str(&reset_date, DATE_FORMAT).map_err(|e| {
                AuraError::Storage {
                    source: Box::new(e),
                }
            })?;

        Ok(Some(LedgerSnapshot {
            cumulative_cost,
            call_count: call_count.max(0) as u64,
            reset_date,
        }))
    }

    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), AuraError> {
        let cumulative_cost = snapshot.cumulative_cost;
        let call_count = i64::try_from(snapshot.call_count).unwrap_or(i64::MAX);
        let reset_date = snapshot.reset_date.format(DATE_FORMAT).to_string();

        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO usage_ledger (id, cumulative_cost, call_count, reset_date) \
                     VALUES (1, ?1, ?2, ?3) \
                     ON CONFLICT(id) DO UPDATE SET cumulative_cost = excluded.cumulative_cost, \
                     call_count = excluded.call_count, reset_date = excluded.reset_date",
                    rusqlite::params![cumulative_cost, call_count, reset_date],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        debug!(
            cumulative_cost = snapshot.cumulative_cost,
            call_count = snapshot.call_count,
            "usage snapshot saved"
        );
        Ok(())
    }

    async fn append(&self, record: &UsageRecord) -> Result<(), AuraError> {
        let id = record.id.clone();
        let model = record.model.clone();
        let prompt_tokens = record.prompt_tokens;
        let completion_tokens = record.completion_tokens;
        let cost_usd = record.cost_usd;
        let created_at = record.created_at.clone();

        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO usage_calls (id, model, prompt_tokens, completion_tokens, \
                     cost_usd, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    rusqlite::params![
                        id,
                        model,
                        prompt_tokens,
                        completion_tokens,
                        cost_usd,
                        created_at,
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        info!(
            model = %record.model,
            prompt_tokens = record.prompt_tokens,
            completion_tokens = record.completion_tokens,
            cost_usd = record.cost_usd,
            "cost recorded"
        );
        Ok(())
    }
}
