use crate::{
    errors::{check_index, check_same_len, Axis, LinalgError, Result},
    iterator::{Columns, Rows},
    numeric::Numeric,
    vector::Vector,
};
use std::fmt::{Display, Formatter};
use std::ops::Index;

/// A rectangular matrix of numbers, stored row-major.
///
/// A matrix with zero rows always has zero columns, so `shape()` of an empty
/// matrix is `(0, 0)` no matter how it was built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Builds a matrix from row-major `data`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::LengthMismatch`] if `data.len() != rows * cols`. When
    /// `rows * cols` overflows, the expected length is reported as `usize::MAX`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let Some(expected) = rows.checked_mul(cols) else {
            log::debug!("from_vec: {} x {} overflows usize", rows, cols);
            return Err(LinalgError::LengthMismatch {
                left: usize::MAX,
                right: data.len(),
            });
        };
        check_same_len("from_vec", expected, data.len())?;
        let cols = if rows == 0 { 0 } else { cols };
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// [`LinalgError::RaggedRows`] if any row's length differs from the first
    /// row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                log::debug!(
                    "from_rows: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                );
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Returns a `num_rows x num_cols` matrix whose `(i, j)`-th entry is
    /// `entry_fn(i, j)`. Entries are produced in row-major order.
    pub fn from_fn(
        num_rows: usize,
        num_cols: usize,
        mut entry_fn: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let cols = if num_rows == 0 { 0 } else { num_cols };
        let mut data = Vec::with_capacity(num_rows * cols);
        for i in 0..num_rows {
            for j in 0..cols {
                data.push(entry_fn(i, j));
            }
        }

        Self {
            data,
            rows: num_rows,
            cols,
        }
    }

    /// Returns `(# of rows, # of columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(self)
    }
}

impl<T: Numeric> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    /// Returns the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Returns the `i`-th row as a vector.
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        check_index("get_row", Axis::Row, i, self.rows)?;
        Ok(self.row_slice(i).iter().copied().collect())
    }

    /// Returns the `j`-th column as a vector, in row order.
    pub fn column(&self, j: usize) -> Result<Vector<T>> {
        check_index("get_column", Axis::Column, j, self.cols)?;
        Ok(self.column_unchecked(j))
    }

    pub(crate) fn column_unchecked(&self, j: usize) -> Vector<T> {
        (0..self.rows)
            .map(|i| self.data[i * self.cols + j])
            .collect()
    }

    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(self)
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i])
    }

    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: Copy, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    fn from(vals: [[T; N]; M]) -> Self {
        Self::from_fn(M, N, |i, j| vals[i][j])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        &self.data[i * self.cols + j]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
