//! # Command Implementations
//!
//! Each submodule handles one CLI command (similar, vector, info, normalize).

pub mod info;
pub mod normalize;
pub mod similar;
pub mod vector;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

use crate::config;
use crate::core::KeyKind;
use crate::storage::EmbeddingStore;
use crate::ui;

/// Resolve the store path and load it, labelled as words or documents
pub fn load_store(store: Option<PathBuf>, docs: bool) -> Result<EmbeddingStore> {
	let path = config::resolve_store_path(store)?;
	let start = Instant::now();

	let kind = if docs { KeyKind::Document } else { KeyKind::Word };
	let store = EmbeddingStore::from_file(&path)
		.with_context(|| format!("Failed to load embeddings from {}", path.display()))?
		.with_kind(kind);

	ui::debug(&format!(
		"Loaded {} {} vectors from {} in {}ms",
		store.len(),
		kind.label(),
		path.display(),
		start.elapsed().as_millis()
	));

	Ok(store)
}
