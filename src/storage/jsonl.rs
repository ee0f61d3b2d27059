//! Newline-delimited JSON record format
//!
//! Each line is one object mapping a key to its vector: `{"key": [0.1, 0.2]}`.
//! Reading merges all lines into one mapping; a later record for an existing
//! key replaces the earlier vector.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::{Error, Result};

struct Record<'a> {
	key: &'a str,
	vector: &'a [f32],
}

impl Serialize for Record<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(self.key, self.vector)?;
		map.end()
	}
}

/// Read every record of a file into one mapping, in first-seen key order
pub fn read(path: &Path) -> Result<IndexMap<String, Vec<f32>>> {
	let file = File::open(path).map_err(|e| Error::io(path, e))?;
	let reader = BufReader::new(file);
	let mut entries = IndexMap::new();

	for (idx, line) in reader.lines().enumerate() {
		let line = line.map_err(|e| Error::io(path, e))?;
		if line.trim().is_empty() {
			continue;
		}
		let record: IndexMap<String, Vec<f32>> =
			serde_json::from_str(&line).map_err(|source| Error::Parse {
				path: path.to_path_buf(),
				line: idx + 1,
				source,
			})?;
		entries.extend(record);
	}

	Ok(entries)
}

/// Write one record per line
pub fn write<'a, I>(path: &Path, records: I) -> Result<()>
where
	I: IntoIterator<Item = (&'a str, &'a [f32])>,
{
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
	}

	let file = File::create(path).map_err(|e| Error::io(path, e))?;
	let mut out = BufWriter::new(file);

	for (key, vector) in records {
		serde_json::to_writer(&mut out, &Record { key, vector }).map_err(|e| Error::io(path, e.into()))?;
		out.write_all(b"\n").map_err(|e| Error::io(path, e))?;
	}

	out.flush().map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn later_records_overwrite_earlier_ones() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("words.jl");
		fs::write(&path, "{\"a\": [1, 0]}\n{\"b\": [0, 1]}\n\n{\"a\": [2, 2]}\n").unwrap();

		let entries = read(&path).unwrap();
		assert_eq!(entries.len(), 2);
		assert_eq!(entries["a"], vec![2.0, 2.0]);
		assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["a", "b"]);
	}

	#[test]
	fn bad_line_reports_its_number() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.jl");
		fs::write(&path, "{\"a\": [1]}\n{\"b\": \"oops\"}\n").unwrap();

		match read(&path).unwrap_err() {
			Error::Parse { line, .. } => assert_eq!(line, 2),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn written_lines_hold_one_key_each() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested").join("out.jl");
		let a = [1.0_f32, 0.5];
		let b = [0.0_f32, -3.0];
		write(&path, [("a", &a[..]), ("b", &b[..])]).unwrap();

		let text = fs::read_to_string(&path).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines, vec![r#"{"a":[1.0,0.5]}"#, r#"{"b":[0.0,-3.0]}"#]);
	}

	#[test]
	fn double_precision_values_load_as_nearest_f32() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("f64.jl");
		fs::write(&path, "{\"a\": [0.123456789012345, 1e-40]}\n").unwrap();

		let entries = read(&path).unwrap();
		assert_eq!(entries["a"], vec![0.123456789012345_f64 as f32, 1e-40_f64 as f32]);

		let out = dir.path().join("out.jl");
		write(&out, entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))).unwrap();
		assert!(!fs::read_to_string(&out).unwrap().contains("0.123456789012345"));
		assert_eq!(read(&out).unwrap(), entries);
	}

	#[test]
	fn missing_file_is_io_error() {
		let dir = tempdir().unwrap();
		let err = read(&dir.path().join("absent.jl")).unwrap_err();
		assert!(matches!(err, Error::Io { .. }));
	}
}
