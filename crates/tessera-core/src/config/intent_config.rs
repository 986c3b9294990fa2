use serde::{Deserialize, Serialize};

/// One keyword-triggered boost rule as written in TOML.
///
/// Categories stay strings here and are parsed when the rule table is built,
/// so an unknown category reports which rule it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRuleConfig {
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub multiplier: f64,
}

/// Intent booster configuration. `rules = None` uses the builtin table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub rules: Option<Vec<IntentRuleConfig>>,
}
