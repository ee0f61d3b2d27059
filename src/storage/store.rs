//! Key to vector store
//!
//! Built once, then queried read-only. Vectors handed out are copies.

use std::path::Path;

use indexmap::IndexMap;

use crate::core::vector::{self, l2_normalize_matrix};
use crate::core::{Error, KeyKind, Notice, Reported, Result};
use crate::storage::jsonl;

#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
	entries: IndexMap<String, Vec<f32>>,
	kind: KeyKind,
}

/// Lengths found in a store, measured against its first entry
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionReport {
	pub dimension: Option<usize>,
	pub mismatched: Vec<(String, usize)>,
}

impl DimensionReport {
	pub fn is_consistent(&self) -> bool {
		self.mismatched.is_empty()
	}
}

impl EmbeddingStore {
	/// Build from an existing key to vector mapping
	pub fn from_mapping<I, K>(mapping: I) -> Self
	where
		I: IntoIterator<Item = (K, Vec<f32>)>,
		K: Into<String>,
	{
		let mut entries = IndexMap::new();
		for (key, vector) in mapping {
			entries.insert(key.into(), vector);
		}
		Self { entries, kind: KeyKind::default() }
	}

	/// Load from a newline-delimited JSON file
	pub fn from_file(path: &Path) -> Result<Self> {
		if path.as_os_str().is_empty() {
			return Err(Error::Configuration(
				"expected an embeddings file or an embeddings mapping".to_string(),
			));
		}
		let entries = jsonl::read(path)?;
		Ok(Self { entries, kind: KeyKind::default() })
	}

	pub fn with_kind(mut self, kind: KeyKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn kind(&self) -> KeyKind {
		self.kind
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Keys in load order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Length of the first vector; other entries are not checked
	pub fn dimension(&self) -> Option<usize> {
		self.entries.values().next().map(Vec::len)
	}

	pub fn dimension_report(&self) -> DimensionReport {
		let dimension = self.dimension();
		let mismatched = match dimension {
			Some(dim) => self
				.entries
				.iter()
				.filter(|(_, v)| v.len() != dim)
				.map(|(k, v)| (k.clone(), v.len()))
				.collect(),
			None => Vec::new(),
		};
		DimensionReport { dimension, mismatched }
	}

	/// Copy of the vector stored under `key`
	pub fn get_vector(&self, key: &str) -> Reported<Option<Vec<f32>>> {
		match self.entries.get(key) {
			Some(v) => Reported::clean(Some(v.clone())),
			None => Reported::new(None, vec![self.missing(key)]),
		}
	}

	/// Elementwise sum of the vectors of every present key.
	///
	/// Absent keys are skipped with a notice. Returns `None` when no key
	/// resolves. Fails only when resolved vectors differ in length.
	pub fn get_aggregate_vector<K: AsRef<str>>(&self, keys: &[K]) -> Result<Reported<Option<Vec<f32>>>> {
		let mut notices = Vec::new();
		let mut resolved = Vec::with_capacity(keys.len());

		for key in keys {
			let key = key.as_ref();
			match self.entries.get(key) {
				Some(v) => resolved.push(v.as_slice()),
				None => notices.push(self.missing(key)),
			}
		}

		if resolved.is_empty() {
			notices.push(Notice::NothingResolved);
			return Ok(Reported::new(None, notices));
		}

		let total = vector::sum(&resolved)?;
		notices.extend(total.notices);
		Ok(Reported::new(total.value, notices))
	}

	/// Write a snapshot, one record per line, in load order
	pub fn persist(&self, path: &Path) -> Result<()> {
		jsonl::write(path, self.iter())
	}

	/// New store with every vector scaled to unit length
	pub fn normalized(&self) -> Result<Self> {
		let rows: Vec<&[f32]> = self.entries.values().map(Vec::as_slice).collect();
		let matrix = l2_normalize_matrix(&rows)?;
		let entries = self
			.entries
			.keys()
			.zip(matrix.rows())
			.map(|(k, row)| (k.clone(), row.to_vec()))
			.collect();
		Ok(Self { entries, kind: self.kind })
	}

	pub(crate) fn vector(&self, key: &str) -> Option<&[f32]> {
		self.entries.get(key).map(Vec::as_slice)
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	fn missing(&self, key: &str) -> Notice {
		Notice::MissingKey { key: key.to_string(), kind: self.kind }
	}
}

impl<K: Into<String>> FromIterator<(K, Vec<f32>)> for EmbeddingStore {
	fn from_iter<I: IntoIterator<Item = (K, Vec<f32>)>>(iter: I) -> Self {
		Self::from_mapping(iter)
	}
}
