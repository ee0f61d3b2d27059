//! # vecsim
//!
//! In-memory key to vector store with similarity-based retrieval over word
//! and document embeddings. Provides vector lookup and aggregation, absolute
//! cosine similarity, and top-k neighbour ranking.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod storage;
pub mod ui;

pub use crate::core::{Error, KeyKind, Notice, Reported, Result};
pub use engine::{RankOrder, RankedResult, SimilarParams, SimilarityEngine};
pub use storage::EmbeddingStore;
