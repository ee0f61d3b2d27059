//! Similarity queries over an [`EmbeddingStore`]
//!
//! Every query is a brute-force scan of the whole store; there is no index.
//! The engine only borrows the store and never modifies it.

pub mod ranking;
pub mod similarity;

use indexmap::IndexMap;

use crate::config::{DEFAULT_K, DEFAULT_PRUNE_THRESHOLD};
use crate::core::vector::{l2_norm, non_zero_fraction};
use crate::core::{Error, Notice, Reported};
use crate::storage::EmbeddingStore;

pub use ranking::{Neighbor, RankOrder, RankedResult, ScoreBuckets};
pub use similarity::{abs_cosine, compute_similarity};

/// Per-query settings for [`SimilarityEngine::get_similar`]
#[derive(Debug, Clone)]
pub struct SimilarParams {
	/// Maximum neighbours per seed
	pub k: usize,
	/// Candidates denser than this fraction of non-zero entries are skipped.
	/// 1.0 disables pruning. Ignored for document stores.
	pub prune_threshold: f32,
	pub order: RankOrder,
	/// Return every candidate, ranked, regardless of `k`
	pub ignore_k: bool,
	/// Record a notice for seeds absent from the store
	pub report_missing: bool,
}

impl Default for SimilarParams {
	fn default() -> Self {
		Self {
			k: DEFAULT_K,
			prune_threshold: DEFAULT_PRUNE_THRESHOLD,
			order: RankOrder::Highest,
			ignore_k: false,
			report_missing: true,
		}
	}
}

impl SimilarParams {
	pub fn with_k(k: usize) -> Self {
		Self { k, ..Self::default() }
	}

	fn prunes(&self) -> bool {
		self.prune_threshold < 1.0
	}
}

pub struct SimilarityEngine<'a> {
	store: &'a EmbeddingStore,
}

impl<'a> SimilarityEngine<'a> {
	pub fn new(store: &'a EmbeddingStore) -> Self {
		Self { store }
	}

	/// Ranked neighbours of a single seed, `None` if the seed is absent
	pub fn get_similar_to(&self, seed: &str, params: &SimilarParams) -> Reported<Option<RankedResult>> {
		let mut notices = Vec::new();
		let ranked = self.rank(seed, params, &mut notices);
		Reported::new(ranked, notices)
	}

	/// Ranked neighbours for each seed present in the store.
	///
	/// Absent seeds are left out of the result; the rest of the batch still
	/// runs.
	pub fn get_similar<K: AsRef<str>>(
		&self,
		seeds: &[K],
		params: &SimilarParams,
	) -> Reported<IndexMap<String, RankedResult>> {
		let mut notices = Vec::new();
		let mut results = IndexMap::with_capacity(seeds.len());

		for seed in seeds {
			let seed = seed.as_ref();
			if results.contains_key(seed) {
				continue;
			}
			if let Some(ranked) = self.rank(seed, params, &mut notices) {
				results.insert(seed.to_string(), ranked);
			}
		}

		Reported::new(results, notices)
	}

	fn rank(&self, seed: &str, params: &SimilarParams, notices: &mut Vec<Notice>) -> Option<RankedResult> {
		let Some(seed_vector) = self.store.vector(seed) else {
			if params.report_missing {
				notices.push(Notice::MissingKey { key: seed.to_string(), kind: self.store.kind() });
			}
			return None;
		};

		let buckets = self.score_candidates(seed, seed_vector, params, notices);
		Some(buckets.extract_top_k(params.k, params.order, params.ignore_k))
	}

	fn score_candidates(
		&self,
		seed: &str,
		seed_vector: &[f32],
		params: &SimilarParams,
		notices: &mut Vec<Notice>,
	) -> ScoreBuckets {
		let prune = params.prunes() && self.store.kind().supports_pruning();
		let mut buckets = ScoreBuckets::new();

		let seed_norm = l2_norm(seed_vector);
		if !seed_norm.is_finite() {
			notices.push(Notice::NonFiniteVector { key: seed.to_string() });
			return buckets;
		}
		let seed_degenerate = seed_norm == 0.0;
		if seed_degenerate {
			notices.push(Notice::DegenerateVector { key: seed.to_string() });
		}

		for (key, vector) in self.store.iter() {
			if key == seed {
				continue;
			}
			if prune && non_zero_fraction(vector) > params.prune_threshold {
				continue;
			}

			let score = match abs_cosine(seed_vector, vector) {
				Ok(Some(score)) => score,
				Ok(None) => {
					if !seed_degenerate {
						notices.push(Notice::DegenerateVector { key: key.to_string() });
					}
					0.0
				}
				Err(Error::NonFinite) => {
					notices.push(Notice::NonFiniteVector { key: key.to_string() });
					continue;
				}
				Err(_) => {
					notices.push(Notice::SkippedCandidate {
						seed: seed.to_string(),
						key: key.to_string(),
						expected: seed_vector.len(),
						actual: vector.len(),
					});
					continue;
				}
			};
			buckets.insert(score, key);
		}

		buckets
	}
}
