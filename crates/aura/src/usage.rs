// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `aura usage` command implementation.
//!
//! Prints today's spend, call count and remaining budget with a one-line
//! budget status. `--json` emits the same figures for scripting.

use std::io::IsTerminal;

use aura_agent::UsageReport;
use serde::Serialize;

/// Fraction of the cap above which the budget counts as nearly spent.
const NEAR_LIMIT: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Available,
    NearLimit,
    LimitReached,
}

impl BudgetStatus {
    pub fn of(report: &UsageReport) -> Self {
        if report.snapshot.cumulative_cost >= report.daily_cap {
            BudgetStatus::LimitReached
        } else if report.utilization > NEAR_LIMIT {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::Available
        }
    }

    fn label(self) -> &'static str {
        match self {
            BudgetStatus::Available => "budget available",
            BudgetStatus::NearLimit => "near daily limit (>80%)",
            BudgetStatus::LimitReached => "daily limit reached",
        }
    }
}

/// Structured output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct UsageResponse<'a> {
    #[serde(flatten)]
    pub report: &'a UsageReport,
    pub status: BudgetStatus,
}

/// Run the `aura usage` command.
///
/// If `--plain` is passed or stdout is not a TTY, disables colors.
pub fn run_usage(report: &UsageReport, json: bool, plain: bool) {
    let status = BudgetStatus::of(report);

    if json {
        let resp = UsageResponse { report, status };
        println!(
            "{}",
            serde_json::to_string_pretty(&resp).unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    print_usage(report, status, use_color);
}

fn print_usage(report: &UsageReport, status: BudgetStatus, use_color: bool) {
    println!();
    println!("  aura usage ({})", report.snapshot.reset_date);
    println!("  {}", "-".repeat(35));
    println!(
        "    Spent:     ${:.4} of ${:.2}",
        report.snapshot.cumulative_cost, report.daily_cap
    );
    println!("    Calls:     {}", report.snapshot.call_count);
    println!("    Remaining: ${:.4}", report.remaining);

    if use_color {
        use colored::Colorize;
        let line = match status {
            BudgetStatus::Available => format!("{} {}", "✓".green(), status.label().green()),
            BudgetStatus::NearLimit => format!("{} {}", "!".yellow(), status.label().yellow()),
            BudgetStatus::LimitReached => format!("{} {}", "✗".red(), status.label().red()),
        };
        println!("    Status:    {line}");
    } else {
        let tag = match status {
            BudgetStatus::Available => "[OK]",
            BudgetStatus::NearLimit => "[WARN]",
            BudgetStatus::LimitReached => "[FAIL]",
        };
        println!("    Status:    {tag} {}", status.label());
    }

    if !report.online {
        println!();
        println!("  No API key configured: answers come from the offline frameworks.");
    }
    println!();
}
