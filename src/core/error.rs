//! Error types for store construction and vector arithmetic

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// No usable source was given for building a store.
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Two vectors that must share a length do not.
	#[error("Dimension mismatch: expected {expected}, got {actual}")]
	DimensionMismatch { expected: usize, actual: usize },

	/// A vector holds NaN or infinite entries, so no score exists.
	#[error("Vector contains non-finite values")]
	NonFinite,

	#[error("IO error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A record line is not an object of key to numeric array.
	#[error("Invalid record at {}:{line}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		line: usize,
		#[source]
		source: serde_json::Error,
	},
}

impl Error {
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}

	pub fn is_dimension_mismatch(&self) -> bool {
		matches!(self, Self::DimensionMismatch { .. })
	}
}
