use crate::{
    errors::{check_non_empty, check_same_len, Result},
    numeric::Numeric,
};
use std::fmt::{Display, Formatter};
use std::ops::Index;

/// A dynamically-sized vector of numbers.
///
/// Pairwise operations check lengths at runtime and return
/// [`LinalgError::LengthMismatch`](crate::errors::LinalgError::LengthMismatch)
/// rather than truncating. See [`FixedVector`](crate::fixed::FixedVector) for
/// a variant whose length is part of its type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..len).map(f).collect(),
        }
    }
}

impl<T: Numeric> Vector<T> {
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.data.iter().map(|&x| f(x)).collect()
    }

    fn zip_with(&self, op: &'static str, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        check_same_len(op, self.len(), other.len())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with("subtract", other, |a, b| a - b)
    }

    pub fn scalar_multiply(&self, c: T) -> Self {
        self.map(|x| c * x)
    }

    /// Computes `v_1 * w_1 + ... + v_n * w_n`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_same_len("dot", self.len(), other.len())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a * b)
            .sum())
    }

    pub fn sum_of_squares(&self) -> T {
        self.data.iter().map(|&x| x * x).sum()
    }

    /// Euclidean norm, computed as `sqrt(sum_of_squares)`.
    ///
    /// Squares of very small elements (below about `1e-162` for f64) underflow
    /// to zero, so a nonzero vector of such elements has magnitude 0.
    pub fn magnitude(&self) -> T {
        self.sum_of_squares().sqrt()
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: &Self) -> Result<T> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// True when both vectors have the same length and every pair of
    /// elements differs by at most `tol`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    /// Sums all corresponding elements of `vectors`.
    ///
    /// Fails on an empty slice, or when any vector's length differs from the
    /// first one's.
    pub fn sum(vectors: &[Self]) -> Result<Self> {
        check_non_empty("vector_sum", vectors.len())?;
        let num_elements = vectors[0].len();
        for v in vectors {
            check_same_len("vector_sum", num_elements, v.len())?;
        }

        let mut out = Self::zeros(num_elements);
        for v in vectors {
            for (acc, &x) in out.data.iter_mut().zip(v.data.iter()) {
                *acc += x;
            }
        }
        Ok(out)
    }

    /// Element-wise average of `vectors`.
    pub fn mean(vectors: &[Self]) -> Result<Self> {
        check_non_empty("vector_mean", vectors.len())?;
        let n = T::from_count(vectors.len());
        Ok(Self::sum(vectors)?.scalar_multiply(T::one() / n))
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(vals: [T; N]) -> Self {
        Self {
            data: vals.into(),
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
