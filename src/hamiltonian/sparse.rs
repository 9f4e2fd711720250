use itertools::Itertools;
use ndarray::prelude::*;

/// Sparse matrix in coordinate format. The entries are unique, sorted row-major and exact
/// zeros are not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix {
    shape: (usize, usize),
    entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrix {
    /// Builds the matrix from (row, column, value) triplets. Repeated positions are summed.
    pub fn from_triplets(shape: (usize, usize), mut triplets: Vec<(usize, usize, f64)>) -> Self {
        triplets.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        let entries: Vec<(usize, usize, f64)> = triplets
            .into_iter()
            .coalesce(|a, b| {
                if (a.0, a.1) == (b.0, b.1) {
                    Ok((a.0, a.1, a.2 + b.2))
                } else {
                    Err((a, b))
                }
            })
            .filter(|entry| entry.2 != 0.0)
            .collect();
        Self { shape, entries }
    }

    pub fn from_dense(matrix: ArrayView2<f64>) -> Self {
        let triplets: Vec<(usize, usize, f64)> = matrix
            .indexed_iter()
            .filter(|(_, value)| **value != 0.0)
            .map(|((i, j), value)| (i, j, *value))
            .collect();
        Self::from_triplets(matrix.dim(), triplets)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of stored elements.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self
            .entries
            .binary_search_by(|entry| (entry.0, entry.1).cmp(&(i, j)))
        {
            Ok(idx) => self.entries[idx].2,
            Err(_) => 0.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize, f64)> {
        self.entries.iter()
    }

    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense: Array2<f64> = Array2::zeros(self.shape);
        for (i, j, value) in self.entries.iter() {
            dense[[*i, *j]] = *value;
        }
        dense
    }
}
