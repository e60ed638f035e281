use crate::error::Error;

/// Type alias for a single edge: (from, to, weight)
pub type Edge = (usize, usize, f64);

/// Sentinel for "no edge" in an adjacency matrix and "unreachable" in a
/// result matrix. Finiteness must be checked before any arithmetic on a
/// matrix entry; adding a weight to this value is never meaningful.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Dense square matrix of edge weights or distances, stored row-major.
///
/// `get(u, v)` is the weight of edge `u -> v` (or the distance from `u`
/// to `v` in a result matrix), with [`NO_EDGE`] marking absent edges and
/// unreachable pairs. Diagonal entries of an input graph are
/// conventionally ignored: self-loops never contribute to a shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    size: usize,
    entries: Vec<f64>,
}

impl SquareMatrix {
    /// Creates a `size` x `size` matrix with every entry set to `value`.
    pub fn splat(size: usize, value: f64) -> Self {
        Self {
            size,
            entries: vec![value; size * size],
        }
    }

    /// Creates a matrix from row vectors, rejecting ragged input.
    ///
    /// # Errors
    /// Returns `Error::RaggedMatrix` if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let size = rows.len();
        let mut entries = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::RaggedMatrix {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            entries.extend(values);
        }

        Ok(Self { size, entries })
    }

    /// Creates an adjacency matrix of the given size from an edge list.
    ///
    /// Every entry starts at [`NO_EDGE`]; listed edges overwrite their
    /// `(from, to)` slot. Later duplicates win, matching the "at most one
    /// weight per ordered pair" shape the solver expects.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Self {
        let mut matrix = Self::splat(size, NO_EDGE);
        for &(from, to, weight) in edges {
            matrix.set(from, to, weight);
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `u`, column `v`. Panics if either index is out of bounds.
    pub fn get(&self, u: usize, v: usize) -> f64 {
        debug_assert!(u < self.size && v < self.size);
        self.entries[u * self.size + v]
    }

    pub fn set(&mut self, u: usize, v: usize, value: f64) {
        debug_assert!(u < self.size && v < self.size);
        self.entries[u * self.size + v] = value;
    }

    /// Row `u` as a slice.
    pub fn row(&self, u: usize) -> &[f64] {
        &self.entries[u * self.size..(u + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splat_fills_every_entry() {
        let matrix = SquareMatrix::splat(3, 7.5);
        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(matrix.get(u, v), 7.5);
            }
        }
    }

    #[test]
    fn from_rows_preserves_layout() {
        let matrix =
            SquareMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(1, 0), 2.0);
        assert_eq!(matrix.row(1), &[2.0, 3.0]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = SquareMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0]]);

        assert_eq!(
            result,
            Err(Error::RaggedMatrix {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn from_rows_empty_is_valid() {
        let matrix = SquareMatrix::from_rows(vec![]).unwrap();
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn from_edges_defaults_to_no_edge() {
        let matrix = SquareMatrix::from_edges(3, &[(0, 1, 4.0), (2, 0, -1.0)]);

        assert_eq!(matrix.get(0, 1), 4.0);
        assert_eq!(matrix.get(2, 0), -1.0);
        assert_eq!(matrix.get(1, 2), NO_EDGE);
        assert_eq!(matrix.get(0, 0), NO_EDGE);
    }

    #[test]
    fn from_edges_later_duplicate_wins() {
        let matrix = SquareMatrix::from_edges(2, &[(0, 1, 4.0), (0, 1, 2.0)]);
        assert_eq!(matrix.get(0, 1), 2.0);
    }
}
