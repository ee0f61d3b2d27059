//! Vector command - print the (summed) vector for keys

use anyhow::Result;
use colored::*;

use crate::core::vector::{l2_norm, l2_normalize, non_zero_fraction};
use crate::storage::EmbeddingStore;
use crate::ui;

const PREVIEW_ITEMS: usize = 8;

pub fn run(store: &EmbeddingStore, keys: &[String], normalize: bool, full: bool) -> Result<()> {
	let out = match keys {
		[key] => store.get_vector(key),
		_ => store.get_aggregate_vector(keys)?,
	};
	ui::notices(&out.notices);

	let Some(vector) = out.value else {
		ui::warn("No vector to show");
		return Ok(());
	};

	let vector = if normalize { l2_normalize(&vector) } else { vector };

	let label = if keys.len() == 1 {
		format!("\"{}\"", keys[0])
	} else {
		format!("sum of {} keys", keys.len())
	};
	ui::header(&label);

	if full {
		println!("{}", serde_json::to_string(&vector)?);
	} else {
		println!("  {}", ui::log::vector_preview(&vector, PREVIEW_ITEMS));
	}

	println!(
		"  {} {}   {} {:.4}   {} {:.1}%",
		"dim".dimmed(),
		vector.len(),
		"norm".dimmed(),
		l2_norm(&vector),
		"non-zero".dimmed(),
		non_zero_fraction(&vector) * 100.0
	);

	Ok(())
}
