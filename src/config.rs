//! Application configuration and constants

use std::path::PathBuf;

use crate::core::{Error, Result};

// === Query Defaults ===
pub const DEFAULT_K: usize = 10;
pub const DEFAULT_PRUNE_THRESHOLD: f32 = 1.0;

// === Storage ===
pub const STORE_ENV: &str = "VECSIM_STORE";
pub const DEFAULT_STORE_FILE: &str = "embeddings.jl";

/// Locate the embeddings file: explicit path, then `VECSIM_STORE`, then
/// `embeddings.jl` in the working directory.
pub fn resolve_store_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
	resolve_with(explicit, std::env::var(STORE_ENV).ok())
}

fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Result<PathBuf> {
	if let Some(path) = explicit {
		crate::ui::debug(&format!("Using store: {}", path.display()));
		return Ok(path);
	}

	if let Some(env_path) = env_value.filter(|v| !v.is_empty()) {
		crate::ui::debug(&format!("Using {}: {}", STORE_ENV, env_path));
		return Ok(PathBuf::from(env_path));
	}

	let fallback = PathBuf::from(DEFAULT_STORE_FILE);
	if fallback.is_file() {
		crate::ui::debug(&format!("Found store at: {}", fallback.display()));
		return Ok(fallback);
	}

	Err(Error::Configuration(format!(
		"no embeddings file given; pass --store, set {} or place {} in the working directory",
		STORE_ENV, DEFAULT_STORE_FILE
	)))
}
