//! Score-bucketed top-k extraction
//!
//! Candidates are grouped by their exact score. Two candidates only share a
//! bucket when their scores are bit-identical, so in practice most buckets
//! hold a single key. There is no tolerance-based tie grouping.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
	/// Most similar first
	#[default]
	Highest,
	/// Least similar first
	Lowest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
	pub key: String,
	pub score: f32,
}

/// Ranked neighbours of one seed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
	pub neighbors: Vec<Neighbor>,
}

impl RankedResult {
	pub fn keys(&self) -> Vec<&str> {
		self.neighbors.iter().map(|n| n.key.as_str()).collect()
	}

	pub fn len(&self) -> usize {
		self.neighbors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.neighbors.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
		self.neighbors.iter()
	}
}

/// Query-scoped map from exact score to keys, in insertion order per score
#[derive(Debug, Default)]
pub struct ScoreBuckets {
	buckets: HashMap<u32, Vec<String>>,
	count: usize,
}

impl ScoreBuckets {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, score: f32, key: impl Into<String>) {
		// -0.0 and 0.0 compare equal, so they share a bucket
		let score = if score == 0.0 { 0.0 } else { score };
		self.buckets.entry(score.to_bits()).or_default().push(key.into());
		self.count += 1;
	}

	/// Number of candidates across all buckets
	pub fn len(&self) -> usize {
		self.count
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	/// Distinct scores, sorted explicitly rather than read off the map
	pub fn sorted_scores(&self, order: RankOrder) -> Vec<f32> {
		let mut scores: Vec<f32> = self.buckets.keys().map(|&bits| f32::from_bits(bits)).collect();
		match order {
			RankOrder::Highest => scores.sort_by(|a, b| b.total_cmp(a)),
			RankOrder::Lowest => scores.sort_by(|a, b| a.total_cmp(b)),
		}
		scores
	}

	/// Walk buckets in score order, collecting up to `k` keys.
	///
	/// A bucket that would overflow the budget contributes only its first
	/// keys in insertion order. With `ignore_k` every candidate is returned.
	pub fn extract_top_k(&self, k: usize, order: RankOrder, ignore_k: bool) -> RankedResult {
		let mut neighbors = Vec::with_capacity(if ignore_k { self.count } else { k.min(self.count) });

		for score in self.sorted_scores(order) {
			let remaining = if ignore_k { usize::MAX } else { k - neighbors.len() };
			if remaining == 0 {
				break;
			}
			let Some(keys) = self.buckets.get(&score.to_bits()) else {
				continue;
			};
			neighbors.extend(
				keys.iter()
					.take(remaining)
					.map(|key| Neighbor { key: key.clone(), score }),
			);
		}

		RankedResult { neighbors }
	}
}
