use crate::errors::TesseraResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per text, in order.
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
