//! Embedding storage and its on-disk record format

pub mod jsonl;
pub mod store;

pub use store::{DimensionReport, EmbeddingStore};
