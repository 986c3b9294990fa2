use std::sync::Mutex;

use tessera_core::errors::TesseraResult;
use tessera_core::traits::IEmbeddingProvider;

/// Deterministic embeddings derived from a blake3 hash of the text.
pub struct HashEmbedder {
    dims: usize,
    batches: Mutex<Vec<Vec<String>>>,
}

impl HashEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Every batch received, in call order.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

pub(crate) fn hash_vector(text: &str, dims: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(dims);
    let mut reader = blake3::Hasher::new().update(text.as_bytes()).finalize_xof();
    let mut chunk = [0u8; 4];
    for _ in 0..dims {
        reader.fill(&mut chunk);
        // Map to [-1, 1].
        let v = u32::from_le_bytes(chunk) as f64 / u32::MAX as f64;
        out.push((v * 2.0 - 1.0) as f32);
    }
    out
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        self.batches
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(texts.to_vec());
        Ok(texts.iter().map(|t| hash_vector(t, self.dims)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

/// Claims one dimensionality and returns vectors of another.
pub struct WrongDimEmbedder {
    pub claimed: usize,
    pub actual: usize,
}

impl IEmbeddingProvider for WrongDimEmbedder {
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| hash_vector(t, self.actual)).collect())
    }

    fn dimensions(&self) -> usize {
        self.claimed
    }
}

/// Returns one vector fewer than it was given.
pub struct ShortBatchEmbedder {
    pub dims: usize,
}

impl IEmbeddingProvider for ShortBatchEmbedder {
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .skip(1)
            .map(|t| hash_vector(t, self.dims))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

/// Returns all-zero vectors.
pub struct ZeroEmbedder {
    pub dims: usize,
}

impl IEmbeddingProvider for ZeroEmbedder {
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        Ok(vec![vec![0.0; self.dims]; texts.len()])
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}
