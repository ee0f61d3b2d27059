// Retrieval behaviour through the public library API

use std::fs;

use tempfile::tempdir;
use vecsim::core::vector::{l2_norm, l2_normalize, non_zero_fraction};
use vecsim::engine::compute_similarity;
use vecsim::{EmbeddingStore, Error, KeyKind, Notice, RankOrder, SimilarParams, SimilarityEngine};

fn abc() -> EmbeddingStore {
	EmbeddingStore::from_mapping([
		("a", vec![1.0, 0.0]),
		("b", vec![0.0, 1.0]),
		("c", vec![1.0, 0.0]),
	])
}

/// Small word store with a spread of densities and directions
fn words() -> EmbeddingStore {
	EmbeddingStore::from_mapping([
		("cleo", vec![0.9, 0.1, 0.0, 0.0, 0.0, 0.0]),
		("jessica", vec![0.8, 0.3, 0.0, 0.0, 0.0, 0.0]),
		("street", vec![0.0, 0.0, 1.0, 0.2, 0.0, 0.0]),
		("the", vec![0.3, 0.3, 0.3, 0.3, 0.3, 0.3]),
		("and", vec![0.5, 0.1, 0.2, 0.4, 0.1, 0.2]),
		("california", vec![0.0, 0.0, 0.4, 0.9, 0.0, 0.1]),
		("empty", vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
	])
}

#[test]
fn concrete_scenario() {
	let store = abc();
	let engine = SimilarityEngine::new(&store);

	let out = engine.get_similar(&["a"], &SimilarParams::with_k(2));
	assert_eq!(out.value["a"].keys(), vec!["c", "b"]);

	assert_eq!(compute_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
	assert_eq!(store.get_aggregate_vector(&["a", "c"]).unwrap().value, Some(vec![2.0, 0.0]));
}

#[test]
fn missing_key_is_absent_not_an_error() {
	let out = abc().get_vector("nonexistent");
	assert!(out.value.is_none());
	assert!(out.notices.iter().all(Notice::is_missing_key));
}

#[test]
fn mismatched_lengths_fail() {
	let err = compute_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
	assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3 }));
}

#[test]
fn results_respect_k_and_descend() {
	let store = words();
	let engine = SimilarityEngine::new(&store);
	let seeds: Vec<&str> = store.keys().collect();

	for k in 0..=store.len() + 1 {
		let out = engine.get_similar(&seeds, &SimilarParams::with_k(k));
		assert_eq!(out.value.len(), store.len());
		for (seed, ranked) in &out.value {
			assert!(ranked.len() <= k);
			assert!(!ranked.keys().contains(&seed.as_str()));
			assert!(ranked.neighbors.windows(2).all(|w| w[0].score >= w[1].score));
		}
	}
}

#[test]
fn lowest_mode_ascends() {
	let store = words();
	let engine = SimilarityEngine::new(&store);
	let params = SimilarParams { order: RankOrder::Lowest, ignore_k: true, ..SimilarParams::default() };
	let ranked = engine.get_similar_to("cleo", &params).into_value().unwrap();

	assert_eq!(ranked.len(), store.len() - 1);
	assert!(ranked.neighbors.windows(2).all(|w| w[0].score <= w[1].score));
}

#[test]
fn pruning_excludes_dense_candidates() {
	let store = words();
	let engine = SimilarityEngine::new(&store);
	let params = SimilarParams { k: 100, prune_threshold: 0.5, ..SimilarParams::default() };
	let seeds: Vec<&str> = store.keys().collect();

	let out = engine.get_similar(&seeds, &params);
	for ranked in out.value.values() {
		for key in ranked.keys() {
			let v = store.get_vector(key).into_value().unwrap();
			assert!(non_zero_fraction(&v) <= 0.5, "{key} should have been pruned");
		}
	}
}

#[test]
fn document_store_names_its_kind() {
	let store = abc().with_kind(KeyKind::Document);
	let engine = SimilarityEngine::new(&store);
	let out = engine.get_similar(&["a", "15"], &SimilarParams::with_k(1));

	assert_eq!(out.value.keys().collect::<Vec<_>>(), vec!["a"]);
	assert_eq!(out.notices[0].to_string(), "doc '15' is not in the embeddings, skipping");
}

#[test]
fn normalize_leaves_input_untouched() {
	let v = vec![0.9, 0.1, -4.0];
	let unit = l2_normalize(&v);
	assert!((l2_norm(&unit) - 1.0).abs() < 1e-6);
	assert_eq!(v, vec![0.9, 0.1, -4.0]);
}

#[test]
fn persisted_store_reloads_identically() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("word_embedding_sample.jl");
	let store = words();
	store.persist(&path).unwrap();

	assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), store.len());

	let reloaded = EmbeddingStore::from_file(&path).unwrap();
	let mut original_keys: Vec<&str> = store.keys().collect();
	let mut reloaded_keys: Vec<&str> = reloaded.keys().collect();
	original_keys.sort_unstable();
	reloaded_keys.sort_unstable();
	assert_eq!(original_keys, reloaded_keys);

	for key in store.keys() {
		assert_eq!(reloaded.get_vector(key).value, store.get_vector(key).value);
	}
}

#[test]
fn queries_do_not_mutate_the_store() {
	let store = words();
	let before: Vec<_> = store.keys().map(|k| store.get_vector(k).into_value()).collect();

	let engine = SimilarityEngine::new(&store);
	let _ = engine.get_similar(&["cleo", "street"], &SimilarParams::default());
	let _ = store.get_aggregate_vector(&["cleo", "street", "fake_word"]).unwrap();

	let after: Vec<_> = store.keys().map(|k| store.get_vector(k).into_value()).collect();
	assert_eq!(before, after);
}
