//! Vector arithmetic shared by the store and the similarity engine
//!
//! Every function here returns a fresh vector; inputs are never modified.

use ndarray::Array2;

use super::error::{Error, Result};
use super::notice::{Notice, Reported};

/// Elementwise sum of equal-length vectors.
///
/// An empty list yields `None` with an [`Notice::EmptySum`] notice. Any vector
/// whose length differs from the first fails the whole sum.
pub fn sum<V: AsRef<[f32]>>(vectors: &[V]) -> Result<Reported<Option<Vec<f32>>>> {
	let Some((first, rest)) = vectors.split_first() else {
		return Ok(Reported::new(None, vec![Notice::EmptySum]));
	};

	let mut total = first.as_ref().to_vec();
	for vector in rest {
		let vector = vector.as_ref();
		check_len(total.len(), vector.len())?;
		for (acc, x) in total.iter_mut().zip(vector) {
			*acc += x;
		}
	}

	Ok(Reported::clean(Some(total)))
}

/// Scales a vector to unit L2 norm.
///
/// A zero vector has no direction and is returned unchanged (all zeros).
pub fn l2_normalize(v: &[f32]) -> Vec<f32> {
	let norm = norm_f64(v.iter().copied());
	if norm > 0.0 {
		v.iter().map(|&x| (f64::from(x) / norm) as f32).collect()
	} else {
		v.to_vec()
	}
}

/// Normalizes each row independently into a new matrix.
///
/// Rows must share a length; zero rows stay zero, as in [`l2_normalize`].
pub fn l2_normalize_matrix<R: AsRef<[f32]>>(rows: &[R]) -> Result<Array2<f32>> {
	let dim = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

	let mut flat = Vec::with_capacity(rows.len() * dim);
	for row in rows {
		let row = row.as_ref();
		check_len(dim, row.len())?;
		flat.extend_from_slice(row);
	}

	let actual = flat.len();
	let mut matrix = Array2::from_shape_vec((rows.len(), dim), flat)
		.map_err(|_| Error::DimensionMismatch { expected: rows.len() * dim, actual })?;

	for mut row in matrix.rows_mut() {
		let norm = norm_f64(row.iter().copied());
		if norm > 0.0 {
			row.mapv_inplace(|x| (f64::from(x) / norm) as f32);
		}
	}

	Ok(matrix)
}

/// Fraction of entries that are non-zero, in [0, 1].
///
/// Dense vectors tend to belong to stop-words; the ranking scan uses this to
/// prune them. An empty vector has no non-zero entries and yields 0.0.
pub fn non_zero_fraction(v: &[f32]) -> f32 {
	if v.is_empty() {
		return 0.0;
	}
	let non_zero = v.iter().filter(|&&x| x != 0.0).count();
	non_zero as f32 / v.len() as f32
}

pub fn l2_norm(v: &[f32]) -> f32 {
	norm_f64(v.iter().copied()) as f32
}

/// Squares of f32 entries neither overflow nor underflow in f64
fn norm_f64(v: impl Iterator<Item = f32>) -> f64 {
	v.map(|x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
	if expected == actual {
		Ok(())
	} else {
		Err(Error::DimensionMismatch { expected, actual })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f32, b: f32) -> bool {
		(a - b).abs() < 1e-6
	}

	#[test]
	fn sum_of_single_vector_is_identity() {
		let out = sum(&[vec![1.5_f32, -2.0, 0.0]]).unwrap();
		assert_eq!(out.value, Some(vec![1.5, -2.0, 0.0]));
		assert!(out.notices.is_empty());
	}

	#[test]
	fn sum_is_order_invariant() {
		let a: Vec<f32> = vec![1.0, 2.0, 3.0];
		let b: Vec<f32> = vec![4.0, -5.0, 6.0];
		let c: Vec<f32> = vec![0.0, 1.0, -1.0];
		let forward = sum(&[&a, &b, &c]).unwrap().into_value();
		let backward = sum(&[&c, &b, &a]).unwrap().into_value();
		assert_eq!(forward, backward);
		assert_eq!(forward, Some(vec![5.0, -2.0, 8.0]));
	}

	#[test]
	fn sum_leaves_inputs_untouched() {
		let a: Vec<f32> = vec![1.0, 1.0];
		let b: Vec<f32> = vec![2.0, 2.0];
		let _ = sum(&[&a, &b]).unwrap();
		assert_eq!(a, vec![1.0, 1.0]);
		assert_eq!(b, vec![2.0, 2.0]);
	}

	#[test]
	fn sum_of_nothing_is_absent() {
		let empty: [Vec<f32>; 0] = [];
		let out = sum(&empty).unwrap();
		assert_eq!(out.value, None);
		assert_eq!(out.notices, vec![Notice::EmptySum]);
	}

	#[test]
	fn sum_rejects_unequal_lengths() {
		let err = sum(&[vec![1.0_f32, 2.0], vec![1.0]]).unwrap_err();
		assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 1 }));
	}

	#[test]
	fn normalize_yields_unit_norm() {
		let v: Vec<f32> = vec![3.0, 4.0];
		let n = l2_normalize(&v);
		assert!(close(l2_norm(&n), 1.0));
		assert!(close(n[0], 0.6));
		assert!(close(n[1], 0.8));
		assert_eq!(v, vec![3.0, 4.0]);
	}

	#[test]
	fn normalize_handles_extreme_magnitudes() {
		for v in [vec![1e-30_f32, 0.0], vec![1e20_f32, 0.0], vec![3e-25_f32, 4e-25], vec![3e30_f32, -4e30]] {
			let n = l2_normalize(&v);
			assert!(close(l2_norm(&n), 1.0), "{v:?} normalized to {n:?}");
		}
		assert_eq!(l2_normalize(&[1e-30, 0.0]), vec![1.0, 0.0]);
		assert_eq!(l2_normalize(&[1e20, 0.0]), vec![1.0, 0.0]);
	}

	#[test]
	fn norm_of_extreme_vectors_is_finite_and_nonzero() {
		assert_eq!(l2_norm(&[1e-30, 0.0]), 1e-30);
		assert_eq!(l2_norm(&[1e20, 0.0]), 1e20);
	}

	#[test]
	fn matrix_rows_with_extreme_magnitudes_reach_unit_norm() {
		let rows: Vec<Vec<f32>> = vec![vec![1e-30, 0.0], vec![0.0, 1e20], vec![3e-25, 4e-25]];
		let m = l2_normalize_matrix(&rows).unwrap();
		for row in m.rows() {
			let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
			assert!(close(norm, 1.0), "row {row:?}");
		}
	}

	#[test]
	fn normalize_keeps_zero_vector() {
		assert_eq!(l2_normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
	}

	#[test]
	fn matrix_rows_are_normalized_independently() {
		let rows: Vec<Vec<f32>> = vec![vec![3.0, 4.0], vec![0.0, 0.0], vec![0.0, 2.0]];
		let m = l2_normalize_matrix(&rows).unwrap();
		assert_eq!(m.dim(), (3, 2));
		assert!(close(m[[0, 0]], 0.6));
		assert!(close(m[[0, 1]], 0.8));
		assert_eq!(m[[1, 0]], 0.0);
		assert_eq!(m[[2, 1]], 1.0);
		assert_eq!(rows[0], vec![3.0, 4.0]);
	}

	#[test]
	fn matrix_rejects_ragged_rows() {
		let rows: Vec<Vec<f32>> = vec![vec![1.0, 0.0], vec![1.0]];
		assert!(l2_normalize_matrix(&rows).unwrap_err().is_dimension_mismatch());
	}

	#[test]
	fn non_zero_fraction_counts_entries() {
		assert_eq!(non_zero_fraction(&[0.0, 0.0, 0.0]), 0.0);
		assert_eq!(non_zero_fraction(&[1.0, 2.0, 0.0]), 2.0 / 3.0);
		assert_eq!(non_zero_fraction(&[]), 0.0);
	}
}
