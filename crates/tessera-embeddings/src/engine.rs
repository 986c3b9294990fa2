//! EmbeddingStage: certified units in, normalized vectors out.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use tessera_core::config::EmbeddingConfig;
use tessera_core::errors::{EmbeddingError, TesseraResult};
use tessera_core::traits::IEmbeddingProvider;
use tessera_privacy::CertifiedContentUnit;

use crate::vectors;

/// A certified unit paired with its unit-length vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedUnit {
    pub unit: CertifiedContentUnit,
    pub vector: Vec<f32>,
}

/// Batches certified units through an [`IEmbeddingProvider`].
///
/// Each unit is embedded as its context prefix and body. Every returned
/// vector is checked against the configured dimensionality and
/// L2-normalized. A failed batch fails the whole call; no partial output.
pub struct EmbeddingStage {
    provider: Arc<dyn IEmbeddingProvider>,
    dimensions: usize,
    batch_size: usize,
}

impl EmbeddingStage {
    /// # Errors
    /// `DimensionMismatch` if the provider's dimensionality differs from the
    /// configured one.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> TesseraResult<Self> {
        if provider.dimensions() != config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: config.dimensions,
                actual: provider.dimensions(),
            }
            .into());
        }
        Ok(Self {
            provider,
            dimensions: config.dimensions,
            batch_size: config.batch_size.max(1),
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Embed units in order.
    pub fn embed(&self, units: &[CertifiedContentUnit]) -> TesseraResult<Vec<EmbeddedUnit>> {
        let mut out = Vec::with_capacity(units.len());
        for (batch_index, batch) in units.chunks(self.batch_size).enumerate() {
            let texts: Vec<String> = batch.iter().map(CertifiedContentUnit::embedding_input).collect();
            let batch_vectors = self.provider.embed_batch(&texts)?;
            if batch_vectors.len() != batch.len() {
                return Err(EmbeddingError::BatchSizeMismatch {
                    expected: batch.len(),
                    actual: batch_vectors.len(),
                }
                .into());
            }

            for (unit, mut vector) in batch.iter().zip(batch_vectors) {
                vectors::validate_dimensions(&vector, self.dimensions)?;
                if !vectors::l2_normalize(&mut vector) {
                    return Err(EmbeddingError::ZeroVector {
                        unit_id: unit.id().to_string(),
                    }
                    .into());
                }
                out.push(EmbeddedUnit {
                    unit: unit.clone(),
                    vector,
                });
            }
            debug!(batch = batch_index, units = batch.len(), "embedding batch complete");
        }
        Ok(out)
    }

    /// Embed a query string into the same space as the units.
    pub fn embed_query(&self, query: &str) -> TesseraResult<Vec<f32>> {
        let returned = self.provider.embed_batch(&[query.to_string()])?;
        let [mut vector]: [Vec<f32>; 1] = returned.try_into().map_err(|v: Vec<Vec<f32>>| {
            EmbeddingError::BatchSizeMismatch {
                expected: 1,
                actual: v.len(),
            }
        })?;
        vectors::validate_dimensions(&vector, self.dimensions)?;
        if !vectors::l2_normalize(&mut vector) {
            return Err(EmbeddingError::ZeroVector {
                unit_id: "<query>".to_string(),
            }
            .into());
        }
        Ok(vector)
    }
}
