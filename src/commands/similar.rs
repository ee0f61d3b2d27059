//! Similar command - rank nearest keys for each seed

use anyhow::Result;
use colored::*;
use indexmap::IndexMap;
use std::path::Path;
use std::time::Instant;

use crate::engine::{RankOrder, RankedResult, SimilarParams, SimilarityEngine};
use crate::storage::EmbeddingStore;
use crate::ui;

pub fn run(store: &EmbeddingStore, seeds: &[String], params: &SimilarParams, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();

	if store.is_empty() {
		ui::warn("The store is empty, nothing to compare against");
		return Ok(());
	}

	if params.prune_threshold < 1.0 && !store.kind().supports_pruning() {
		ui::debug("Pruning is ignored for document embeddings");
	}

	let engine = SimilarityEngine::new(store);
	let out = engine.get_similar(seeds, params);

	// Keep stdout clean when it carries the JSON export
	if !export.is_some_and(is_stdout) {
		ui::notices(&out.notices);
	}

	let results = out.value;

	if let Some(export_path) = export {
		return export_results(&results, export_path);
	}

	if results.is_empty() {
		ui::warn("No seeds found in the store");
		return Ok(());
	}

	for (seed, ranked) in &results {
		print_ranked(seed, ranked, params.order);
	}

	println!();
	ui::success(&format!(
		"Ranked {} of {} seeds against {} vectors in {}ms",
		results.len(),
		seeds.len(),
		store.len(),
		start.elapsed().as_millis()
	));

	Ok(())
}

fn print_ranked(seed: &str, ranked: &RankedResult, order: RankOrder) {
	let title = match order {
		RankOrder::Highest => format!("Closest to \"{}\"", seed),
		RankOrder::Lowest => format!("Farthest from \"{}\"", seed),
	};
	ui::header(&title);

	if ranked.is_empty() {
		println!("  {}", "no candidates".dimmed());
		return;
	}

	for (i, neighbor) in ranked.iter().enumerate() {
		println!(
			"{}. {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			ui::log::score(neighbor.score),
			neighbor.key.bright_white()
		);
	}
}

fn export_results(results: &IndexMap<String, RankedResult>, export_path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(results)?;
	if is_stdout(export_path) {
		println!("{}", json);
	} else {
		std::fs::write(export_path, json)?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}
	Ok(())
}

fn is_stdout(path: &Path) -> bool {
	path.to_str() == Some("-") || path.as_os_str().is_empty()
}
