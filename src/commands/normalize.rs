//! Normalize command - persist a unit-length copy of the store

use anyhow::{Context, Result};
use std::path::Path;

use crate::storage::EmbeddingStore;
use crate::ui;

pub fn run(store: &EmbeddingStore, output: &Path) -> Result<()> {
	let normalized = store
		.normalized()
		.context("Cannot normalize a store whose vectors differ in length (see 'vecsim info')")?;

	normalized
		.persist(output)
		.with_context(|| format!("Failed to write {}", output.display()))?;

	ui::success(&format!(
		"Wrote {} normalized vectors to {}",
		normalized.len(),
		ui::path_link(output)
	));

	Ok(())
}
