//! Keyword-triggered category boosts.
//!
//! An ordered table of rules. Every rule with a keyword that appears in the
//! query (case-insensitive substring) multiplies the score of candidates in
//! its target categories. Matching rules compose multiplicatively in table
//! order. The default table is hardcoded; `[intent] rules` in TOML replaces it.

use tracing::debug;

use tessera_core::config::{IntentConfig, IntentRuleConfig};
use tessera_core::errors::{ConfigError, TesseraResult};
use tessera_core::models::sort_best_first;
use tessera_core::{Category, ScoredCandidate};

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentRule {
    keywords: Vec<String>,
    categories: Vec<Category>,
    multiplier: f64,
}

impl IntentRule {
    /// Build a validated rule. Keywords are stored lowercased.
    ///
    /// # Errors
    /// `InvalidIntentRule` for an empty keyword set, an empty keyword, no
    /// target categories, or a multiplier that is not > 1.0.
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        categories: impl IntoIterator<Item = Category>,
        multiplier: f64,
    ) -> TesseraResult<Self> {
        Self::build(0, keywords, categories, multiplier)
    }

    fn build(
        index: usize,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        categories: impl IntoIterator<Item = Category>,
        multiplier: f64,
    ) -> TesseraResult<Self> {
        let invalid = |reason: &str| ConfigError::InvalidIntentRule {
            index,
            reason: reason.to_string(),
        };
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.into().trim().to_lowercase())
            .collect();
        if keywords.is_empty() {
            return Err(invalid("no keywords").into());
        }
        if keywords.iter().any(String::is_empty) {
            return Err(invalid("empty keyword").into());
        }
        let mut categories: Vec<Category> = categories.into_iter().collect();
        categories.sort();
        categories.dedup();
        if categories.is_empty() {
            return Err(invalid("no target categories").into());
        }
        if !multiplier.is_finite() || multiplier <= 1.0 {
            return Err(invalid("multiplier must be > 1.0").into());
        }
        Ok(Self {
            keywords,
            categories,
            multiplier,
        })
    }

    fn from_config(index: usize, cfg: &IntentRuleConfig) -> TesseraResult<Self> {
        let categories = cfg
            .categories
            .iter()
            .map(|c| c.parse::<Category>())
            .collect::<TesseraResult<Vec<_>>>()?;
        Self::build(index, cfg.keywords.iter().cloned(), categories, cfg.multiplier)
    }

    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.keywords.iter().any(|k| query_lower.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

/// The intent booster and its rule table.
#[derive(Debug, Clone)]
pub struct IntentBooster {
    rules: Vec<IntentRule>,
}

impl IntentBooster {
    /// Booster with the builtin rule table.
    pub fn builtin() -> Self {
        use Category as C;

        let rules = vec![
            // Shipping and operating workloads.
            builtin_rule(
                &["kubernetes", "k8s", "deploy", "helm", "kubectl", "rollout"],
                &[C::Deploy, C::Runbook],
                1.3,
            ),
            builtin_rule(
                &["terraform", "infrastructure", "provision", "vpc", "iam policy"],
                &[C::Infra],
                1.3,
            ),
            builtin_rule(
                &["incident", "outage", "on-call", "oncall", "postmortem", "runbook"],
                &[C::Runbook, C::Chat],
                1.25,
            ),
            builtin_rule(
                &["openapi", "swagger", "endpoint", "schema", "grpc"],
                &[C::ApiSpec],
                1.3,
            ),
            builtin_rule(
                &["meeting", "standup", "discussed", "decided", "who said"],
                &[C::Chat, C::Meeting],
                1.2,
            ),
            builtin_rule(
                &["function", "class", "implementation", "stack trace", "compile"],
                &[C::Code],
                1.2,
            ),
        ];
        Self { rules }
    }

    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// `rules = None` keeps the builtin table; otherwise every configured rule
    /// must validate.
    pub fn from_config(config: &IntentConfig) -> TesseraResult<Self> {
        match &config.rules {
            None => Ok(Self::builtin()),
            Some(rules) => rules
                .iter()
                .enumerate()
                .map(|(i, cfg)| IntentRule::from_config(i, cfg))
                .collect::<TesseraResult<Vec<_>>>()
                .map(Self::new),
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Combined multiplier the query applies to one category.
    pub fn multiplier_for(&self, query: &str, category: Category) -> f64 {
        let query_lower = query.to_lowercase();
        self.rules
            .iter()
            .filter(|r| r.matches(&query_lower) && r.categories.contains(&category))
            .fold(1.0, |acc, r| acc * r.multiplier)
    }

    /// Reweight candidates for the query and re-sort. Never adds or removes
    /// candidates.
    pub fn boost_intent(&self, query: &str, mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
        let query_lower = query.to_lowercase();
        let matched: Vec<&IntentRule> = self.rules.iter().filter(|r| r.matches(&query_lower)).collect();
        if matched.is_empty() {
            return candidates;
        }

        for candidate in &mut candidates {
            let mut score = candidate.base_score();
            let mut touched = false;
            for rule in matched.iter().filter(|r| r.categories.contains(&candidate.category)) {
                score *= rule.multiplier;
                touched = true;
            }
            if touched {
                candidate.set_boosted(score);
            }
        }

        debug!(rules = matched.len(), "intent boost applied");
        sort_best_first(&mut candidates);
        candidates
    }
}

fn builtin_rule(keywords: &[&str], categories: &[Category], multiplier: f64) -> IntentRule {
    IntentRule {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        categories: categories.to_vec(),
        multiplier,
    }
}

impl Default for IntentBooster {
    fn default() -> Self {
        Self::builtin()
    }
}
