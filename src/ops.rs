//! Free-function surface over [`Vector`] and [`Matrix`].
//!
//! Each function is a thin wrapper over the corresponding method, for callers
//! that prefer `dot(&v, &w)` to `v.dot(&w)`.

use crate::{errors::Result, matrix::Matrix, numeric::Numeric, vector::Vector};

/// Adds corresponding elements.
pub fn add<T: Numeric>(v: &Vector<T>, w: &Vector<T>) -> Result<Vector<T>> {
    v.add(w)
}

/// Subtracts corresponding elements.
pub fn subtract<T: Numeric>(v: &Vector<T>, w: &Vector<T>) -> Result<Vector<T>> {
    v.subtract(w)
}

/// Sums all corresponding elements.
pub fn vector_sum<T: Numeric>(vectors: &[Vector<T>]) -> Result<Vector<T>> {
    Vector::sum(vectors)
}

/// Multiplies every element by `c`.
pub fn scalar_multiply<T: Numeric>(c: T, v: &Vector<T>) -> Vector<T> {
    v.scalar_multiply(c)
}

/// Computes the element-wise average.
pub fn vector_mean<T: Numeric>(vectors: &[Vector<T>]) -> Result<Vector<T>> {
    Vector::mean(vectors)
}

/// Computes `v_1 * w_1 + ... + v_n * w_n`.
pub fn dot<T: Numeric>(v: &Vector<T>, w: &Vector<T>) -> Result<T> {
    v.dot(w)
}

/// Returns `v_1 * v_1 + ... + v_n * v_n`.
pub fn sum_of_squares<T: Numeric>(v: &Vector<T>) -> T {
    v.sum_of_squares()
}

/// Euclidean norm of `v`.
pub fn magnitude<T: Numeric>(v: &Vector<T>) -> T {
    v.magnitude()
}

/// Euclidean distance between `v` and `w`.
pub fn distance<T: Numeric>(v: &Vector<T>, w: &Vector<T>) -> Result<T> {
    v.distance(w)
}

/// Returns `(# of rows, # of columns)` of `a`.
pub fn shape<T>(a: &Matrix<T>) -> (usize, usize) {
    a.shape()
}

/// Returns the `i`-th row of `a` as a vector.
pub fn get_row<T: Numeric>(a: &Matrix<T>, i: usize) -> Result<Vector<T>> {
    a.row(i)
}

/// Returns the `j`-th column of `a` as a vector.
pub fn get_column<T: Numeric>(a: &Matrix<T>, j: usize) -> Result<Vector<T>> {
    a.column(j)
}

/// Returns a `num_rows x num_cols` matrix whose `(i, j)`-th entry is
/// `entry_fn(i, j)`.
pub fn make_matrix<T>(
    num_rows: usize,
    num_cols: usize,
    entry_fn: impl FnMut(usize, usize) -> T,
) -> Matrix<T> {
    Matrix::from_fn(num_rows, num_cols, entry_fn)
}

/// Returns the `n x n` identity matrix.
pub fn identity_matrix<T: Numeric>(n: usize) -> Matrix<T> {
    Matrix::identity(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LinalgError;

    #[test]
    fn test_vector_ops() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        let w = Vector::from([4.0, 5.0, 6.0]);

        assert_eq!(add(&v, &w).unwrap(), Vector::from([5.0, 7.0, 9.0]));
        assert_eq!(subtract(&w, &v).unwrap(), Vector::from([3.0, 3.0, 3.0]));
        assert_eq!(scalar_multiply(2.0, &v), Vector::from([2.0, 4.0, 6.0]));
        assert_eq!(dot(&v, &w).unwrap(), 32.0);
        assert_eq!(sum_of_squares(&v), 14.0);
        assert_eq!(magnitude(&Vector::from([3.0, 4.0])), 5.0);
        assert_eq!(distance(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn test_reductions() {
        let vs = vec![Vector::from([1.0, 2.0]), Vector::from([3.0, 4.0]), Vector::from([5.0, 6.0])];

        assert_eq!(vector_sum(&vs).unwrap(), Vector::from([9.0, 12.0]));
        assert_eq!(vector_mean(&vs).unwrap(), Vector::from([3.0, 4.0]));
        assert_eq!(vector_mean::<f64>(&[]), Err(LinalgError::EmptyInput));
    }

    #[test]
    fn test_matrix_ops() {
        let a: Matrix<f64> = make_matrix(2, 3, |i, j| (i * 3 + j + 1) as f64);

        assert_eq!(shape(&a), (2, 3));
        assert_eq!(get_row(&a, 0).unwrap(), Vector::from([1.0, 2.0, 3.0]));
        assert_eq!(get_column(&a, 2).unwrap(), Vector::from([3.0, 6.0]));
        assert!(get_row(&a, 2).is_err());
        assert_eq!(identity_matrix::<f64>(2), Matrix::from([[1.0, 0.0], [0.0, 1.0]]));
    }
}
