//! Absolute cosine similarity

use crate::core::vector::check_len;
use crate::core::{Error, Result};

/// `|dot(a, b)| / (|a| * |b|)`, in [0.0, 1.0].
///
/// A zero-norm side has no direction; that pair scores 0.0. Use
/// [`abs_cosine`] to tell the fallback apart from a real 0.0.
pub fn compute_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
	Ok(abs_cosine(a, b)?.unwrap_or(0.0))
}

/// Like [`compute_similarity`] but `None` when either vector is all zeros.
///
/// Fails with [`Error::NonFinite`] when an entry is NaN or infinite.
pub fn abs_cosine(a: &[f32], b: &[f32]) -> Result<Option<f32>> {
	check_len(a.len(), b.len())?;

	// f64 holds the square of any finite f32 without overflow or underflow
	let mut dot = 0.0_f64;
	let mut norm_a = 0.0_f64;
	let mut norm_b = 0.0_f64;
	for (&x, &y) in a.iter().zip(b) {
		let (x, y) = (f64::from(x), f64::from(y));
		dot += x * y;
		norm_a += x * x;
		norm_b += y * y;
	}

	if norm_a == 0.0 || norm_b == 0.0 {
		return Ok(None);
	}

	let score = (dot / (norm_a.sqrt() * norm_b.sqrt())).abs();
	if !score.is_finite() {
		return Err(Error::NonFinite);
	}

	// rounding can push a parallel pair a hair past 1.0
	Ok(Some(score.min(1.0) as f32))
}
