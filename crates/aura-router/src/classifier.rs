// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword classification of prompts for the offline fallback.
//!
//! Pure and total: no network, no model call. The prompt is lower-cased and
//! tested against ordered keyword sets; the first set with a counting hit
//! wins, and anything unmatched is [`Category::General`].
//!
//! A keyword hit does not count when it sits inside a hit of a longer keyword
//! belonging to another set, so "go-to-market" is never read as "market".

use strum::{Display, EnumIter, IntoEnumIterator};

/// Strategy category of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Market,
    Growth,
    Product,
    GoToMarket,
    /// No keyword matched.
    General,
}

const MARKET_KEYWORDS: &[&str] = &["market", "competitor", "competitive"];
const GROWTH_KEYWORDS: &[&str] = &["growth", "scaling", "user"];
const PRODUCT_KEYWORDS: &[&str] = &["product", "feature", "roadmap"];
const GTM_KEYWORDS: &[&str] = &["gtm", "go-to-market", "launch"];

const MARKET_DOC: &str = include_str!("../assets/market.md");
const GROWTH_DOC: &str = include_str!("../assets/growth.md");
const PRODUCT_DOC: &str = include_str!("../assets/product.md");
const GTM_DOC: &str = include_str!("../assets/gtm.md");
const GENERAL_DOC: &str = include_str!("../assets/general.md");

impl Category {
    /// Keywords that select this category, in match order. Empty for `General`.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Market => MARKET_KEYWORDS,
            Category::Growth => GROWTH_KEYWORDS,
            Category::Product => PRODUCT_KEYWORDS,
            Category::GoToMarket => GTM_KEYWORDS,
            Category::General => &[],
        }
    }

    /// The canned markdown document served for this category.
    pub fn document(self) -> &'static str {
        match self {
            Category::Market => MARKET_DOC,
            Category::Growth => GROWTH_DOC,
            Category::Product => PRODUCT_DOC,
            Category::GoToMarket => GTM_DOC,
            Category::General => GENERAL_DOC,
        }
    }
}

/// One keyword occurrence in the lower-cased prompt.
#[derive(Debug, Clone, Copy)]
struct Hit {
    category: Category,
    start: usize,
    end: usize,
}

impl Hit {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn inside(&self, other: &Hit) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

fn hits(lower: &str) -> Vec<Hit> {
    let mut hits = Vec::new();
    for category in Category::iter() {
        for keyword in category.keywords() {
            for (start, _) in lower.match_indices(keyword) {
                hits.push(Hit {
                    category,
                    start,
                    end: start + keyword.len(),
                });
            }
        }
    }
    hits
}

/// Classify a prompt into a strategy [`Category`].
pub fn classify(query: &str) -> Category {
    let lower = query.to_lowercase();
    let hits = hits(&lower);

    let counts = |hit: &Hit| {
        !hits.iter().any(|other| {
            other.category != hit.category && other.len() > hit.len() && hit.inside(other)
        })
    };

    Category::iter()
        .find(|category| hits.iter().any(|h| h.category == *category && counts(h)))
        .unwrap_or(Category::General)
}
