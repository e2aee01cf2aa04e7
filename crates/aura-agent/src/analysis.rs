// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned strategy analyses built on top of [`Dispatcher::dispatch`].

use aura_core::CompletionResult;
use strum::{Display, EnumString, VariantNames};

use crate::dispatcher::Dispatcher;
use crate::persona::TEAM_PERSONA;

pub const DEFAULT_FOCUS_AREA: &str = "user_acquisition";
pub const DEFAULT_TIMEFRAME: &str = "90_days";

/// Analysis kinds, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Analysis {
    Competitive,
    Growth,
    Roadmap,
    Team,
}

/// Prompt for a head-to-head analysis against `competitor`, or for the whole
/// landscape when `None`.
pub fn competitive_prompt(competitor: Option<&str>) -> String {
    match competitor.map(str::trim).filter(|c| !c.is_empty()) {
        Some(competitor) => format!(
            "Conduct a comprehensive \"David vs. Goliath\" competitive analysis of WeWine.app against {competitor}.

Focus on:
1. Strategic positioning opportunities where we can win
2. Specific product features that exploit their weaknesses
3. Marketing strategies that turn their size into a disadvantage
4. Partnership opportunities they're likely missing
5. Actionable competitive moves for the next 90 days

Provide concrete examples and specific tactics we can implement immediately."
        ),
        None => "Analyze the entire competitive landscape for WeWine.app. Identify:
1. Market gaps and white space opportunities
2. Competitive threats and how to counter them
3. Strategic partnerships we should pursue
4. Positioning strategy that differentiates us
5. Specific competitive advantages we can build

Focus on actionable insights that drive growth and defend market position."
            .to_string(),
    }
}

pub fn growth_prompt(focus_area: &str) -> String {
    format!(
        "Develop a comprehensive growth strategy for WeWine.app focused on: {focus_area}

Provide a detailed strategy including:
1. Specific growth tactics and experiments to run
2. 30-60-90 day milestone roadmap with measurable goals
3. Resource requirements and budget allocation
4. Success metrics and KPIs to track
5. Risk assessment and contingency plans
6. Competitive positioning during growth phase
7. Implementation priorities and quick wins

Make recommendations specific, measurable, and implementable with current resources."
    )
}

pub fn roadmap_prompt(timeframe: &str) -> String {
    format!(
        "Create a prioritized {timeframe} product roadmap for WeWine.app using the RICE scoring framework.

Requirements:
1. Theme for the period with clear strategic focus
2. 5-7 prioritized features with RICE scores (Reach, Impact, Confidence, Effort)
3. Detailed feature descriptions with user value propositions
4. Technical requirements and dependencies
5. Success metrics for each feature
6. Resource allocation and team assignments
7. Risk mitigation for high-impact features

Focus on features that maximize user engagement, retention, and business growth."
    )
}

pub fn team_prompt(query: &str) -> String {
    format!(
        "Multi-agent strategic analysis for WeWine.app: {query}

Each agent should provide their expertise perspective on this question, followed by a CEO synthesis
with specific action items, success metrics, and implementation timeline."
    )
}

impl Dispatcher {
    pub async fn competitive_analysis(&self, competitor: Option<&str>) -> CompletionResult {
        self.dispatch(&competitive_prompt(competitor), None).await
    }

    pub async fn growth_strategy(&self, focus_area: Option<&str>) -> CompletionResult {
        let focus_area = focus_area.unwrap_or(DEFAULT_FOCUS_AREA);
        self.dispatch(&growth_prompt(focus_area), None).await
    }

    pub async fn product_roadmap(&self, timeframe: Option<&str>) -> CompletionResult {
        let timeframe = timeframe.unwrap_or(DEFAULT_TIMEFRAME);
        self.dispatch(&roadmap_prompt(timeframe), None).await
    }

    /// Answer `query` as a panel of specialist agents with a CEO synthesis.
    pub async fn team_analysis(&self, query: &str) -> CompletionResult {
        self.dispatch(&team_prompt(query), Some(TEAM_PERSONA.trim()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_router::{classify, Category};
    use std::str::FromStr;

    #[test]
    fn competitive_prompt_names_competitor() {
        let prompt = competitive_prompt(Some("Vivino"));
        assert!(prompt.contains("against Vivino."));
        assert!(prompt.contains("David vs. Goliath"));
    }

    #[test]
    fn blank_competitor_means_landscape() {
        assert_eq!(competitive_prompt(Some("  ")), competitive_prompt(None));
        assert!(competitive_prompt(None).starts_with("Analyze the entire competitive landscape"));
    }

    #[test]
    fn offline_competitive_analysis_serves_market_document() {
        assert_eq!(classify(&competitive_prompt(None)), Category::Market);
        assert_eq!(classify(&competitive_prompt(Some("Vivino"))), Category::Market);
    }

    #[test]
    fn builders_embed_parameters() {
        assert!(growth_prompt("retention").contains("focused on: retention"));
        assert!(roadmap_prompt("6_months").contains("prioritized 6_months product roadmap"));
        assert!(team_prompt("Should we raise?").contains("WeWine.app: Should we raise?"));
    }

    #[test]
    fn analysis_parses_from_cli_names() {
        assert_eq!(Analysis::from_str("roadmap").unwrap(), Analysis::Roadmap);
        assert_eq!(Analysis::Competitive.to_string(), "competitive");
        assert_eq!(Analysis::VARIANTS.len(), 4);
    }
}
