//! Info command - store statistics

use anyhow::Result;
use colored::*;

use crate::storage::EmbeddingStore;
use crate::ui;

/// Inconsistent keys listed before the rest are summarized
const MAX_LISTED: usize = 10;

pub fn run(store: &EmbeddingStore) -> Result<()> {
	ui::log::print_logo();
	ui::header("Store");

	println!("  {} {}", "Kind:".bright_blue(), store.kind().label());
	println!("  {} {}", "Entries:".bright_blue(), store.len());

	let report = store.dimension_report();
	match report.dimension {
		Some(dim) => println!("  {} {}", "Dimension:".bright_blue(), dim),
		None => {
			ui::warn("The store is empty");
			return Ok(());
		}
	}

	if report.is_consistent() {
		ui::success("All vectors share one dimension");
		return Ok(());
	}

	ui::warn(&format!(
		"{} vectors differ from the first entry's dimension",
		report.mismatched.len()
	));
	for (key, len) in report.mismatched.iter().take(MAX_LISTED) {
		println!("  {} {}", key.yellow(), format!("({} dims)", len).dimmed());
	}
	if report.mismatched.len() > MAX_LISTED {
		println!("  {}", format!("… and {} more", report.mismatched.len() - MAX_LISTED).dimmed());
	}

	Ok(())
}
