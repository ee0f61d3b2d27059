//! Non-fatal diagnostics returned next to query results

use std::fmt;

/// Whether a store holds word-level or document-level embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
	#[default]
	Word,
	Document,
}

impl KeyKind {
	pub fn label(self) -> &'static str {
		match self {
			Self::Word => "word",
			Self::Document => "doc",
		}
	}

	/// Stop-word pruning only makes sense for word vectors.
	pub fn supports_pruning(self) -> bool {
		matches!(self, Self::Word)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
	/// Requested key is absent; it was skipped.
	MissingKey { key: String, kind: KeyKind },
	/// None of the keys of an aggregate lookup were present.
	NothingResolved,
	/// Sum over an empty list of vectors.
	EmptySum,
	/// Zero-norm vector met while scoring; the pair scored 0.0.
	DegenerateVector { key: String },
	/// Vector has NaN or infinite entries; it was not ranked.
	NonFiniteVector { key: String },
	/// Candidate length differs from the seed's; not ranked.
	SkippedCandidate {
		seed: String,
		key: String,
		expected: usize,
		actual: usize,
	},
}

impl Notice {
	pub fn is_missing_key(&self) -> bool {
		matches!(self, Self::MissingKey { .. })
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingKey { key, kind } => {
				write!(f, "{} '{}' is not in the embeddings, skipping", kind.label(), key)
			}
			Self::NothingResolved => write!(f, "none of the keys are in the embeddings"),
			Self::EmptySum => write!(f, "nothing to add"),
			Self::DegenerateVector { key } => {
				write!(f, "zero-norm vector for '{}', scored 0.0", key)
			}
			Self::NonFiniteVector { key } => {
				write!(f, "'{}' has NaN or infinite entries, not ranked", key)
			}
			Self::SkippedCandidate { seed, key, expected, actual } => write!(
				f,
				"'{}' has {} dimensions but seed '{}' has {}, not ranked",
				key, actual, seed, expected
			),
		}
	}
}

/// A query payload together with the notices raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
	pub value: T,
	pub notices: Vec<Notice>,
}

impl<T> Reported<T> {
	pub fn new(value: T, notices: Vec<Notice>) -> Self {
		Self { value, notices }
	}

	pub fn clean(value: T) -> Self {
		Self { value, notices: Vec::new() }
	}

	pub fn into_value(self) -> T {
		self.value
	}
}
