// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aura - the strategic AI co-founder of WeWine.app.
//!
//! This is the binary entry point: it loads configuration, installs tracing
//! and runs one command against the cost-gated dispatcher.

mod models;
mod usage;

use std::path::PathBuf;

use aura_agent::{Analysis, build_dispatcher};
use aura_config::model::AuraConfig;
use aura_core::AuraError;
use clap::{Parser, Subcommand};
use tracing::debug;

/// Aura - strategic AI co-founder with a daily cost cap.
#[derive(Parser, Debug)]
#[command(name = "aura", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// API key for this session. Overrides the config file and OPENAI_API_KEY.
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,

    /// Model to use, from `aura models` or any raw model id.
    #[arg(long, global = true, value_name = "MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask Aura a free-form question.
    Ask {
        /// The question. Multiple words are joined with spaces.
        #[arg(required = true)]
        prompt: Vec<String>,
        /// Replace the built-in persona prompt for this question.
        #[arg(long)]
        persona: Option<String>,
    },
    /// Run a canned strategy analysis.
    Analyze {
        /// One of: competitive, growth, roadmap, team.
        kind: Analysis,
        /// Competitor, focus area, timeframe or team question, by kind.
        #[arg(required_if_eq("kind", "team"))]
        argument: Option<String>,
    },
    /// Show today's spend against the daily cap.
    Usage {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Zero today's usage counters.
    ResetUsage,
    /// List selectable models with pricing and family.
    Models,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => aura_config::load_and_validate_path(path),
        None => aura_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            aura_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    if let Err(e) = run(cli, &config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AuraConfig) -> Result<(), AuraError> {
    if let Commands::Models = cli.command {
        models::print_models(config);
        return Ok(());
    }

    let dispatcher =
        build_dispatcher(config, cli.api_key.as_deref(), cli.model.as_deref()).await?;
    debug!(
        model = dispatcher.model(),
        online = dispatcher.is_online(),
        "dispatcher ready"
    );

    match cli.command {
        Commands::Ask { prompt, persona } => {
            let result = dispatcher
                .dispatch(&prompt.join(" "), persona.as_deref())
                .await;
            println!("{}", result.render());
        }
        Commands::Analyze { kind, argument } => {
            let argument = argument.as_deref();
            let result = match kind {
                Analysis::Competitive => dispatcher.competitive_analysis(argument).await,
                Analysis::Growth => dispatcher.growth_strategy(argument).await,
                Analysis::Roadmap => dispatcher.product_roadmap(argument).await,
                Analysis::Team => {
                    dispatcher
                        .team_analysis(argument.unwrap_or_default())
                        .await
                }
            };
            println!("{}", result.render());
        }
        Commands::Usage { json, plain } => {
            usage::run_usage(&dispatcher.usage().await, json, plain);
        }
        Commands::ResetUsage => {
            let snapshot = dispatcher.reset_usage().await;
            println!(
                "Usage reset for {}. Daily budget: ${:.2} available.",
                snapshot.reset_date, config.cost.daily_budget_usd
            );
        }
        Commands::Models => {}
    }

    Ok(())
}

/// Log to stderr so rendered answers on stdout stay clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aura={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
