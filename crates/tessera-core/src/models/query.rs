use serde::{Deserialize, Serialize};

use crate::source_types::Category;

/// Optional narrowing applied to dense/lexical retrieval and to hydrated
/// candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFilters {
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub service: Option<String>,
    pub repository: Option<String>,
}

impl QueryFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.service.is_none() && self.repository.is_none()
    }

    pub fn matches(&self, category: Category, service: Option<&str>, repository: Option<&str>) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&category) {
            return false;
        }
        if let Some(wanted) = self.service.as_deref() {
            if service != Some(wanted) {
                return false;
            }
        }
        if let Some(wanted) = self.repository.as_deref() {
            if repository != Some(wanted) {
                return false;
            }
        }
        true
    }
}

/// Freshness booster parameters for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreshnessParams {
    pub half_life_days: f64,
    /// Blend weight in `[0, 1]`: 0 ignores recency, 1 uses only recency.
    pub weight: f64,
}

/// Orchestration parameters for one retrieval query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub filters: QueryFilters,
    pub limit: usize,
    /// `None` skips the freshness stage.
    #[serde(default)]
    pub freshness: Option<FreshnessParams>,
    pub rerank: bool,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            filters: QueryFilters::default(),
            limit,
            freshness: None,
            rerank: true,
        }
    }

    pub fn with_filters(mut self, filters: QueryFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_freshness(mut self, half_life_days: f64, weight: f64) -> Self {
        self.freshness = Some(FreshnessParams {
            half_life_days,
            weight,
        });
        self
    }

    pub fn with_rerank(mut self, rerank: bool) -> Self {
        self.rerank = rerank;
        self
    }
}
