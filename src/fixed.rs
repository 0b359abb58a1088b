use crate::{
    errors::{check_index, check_non_empty, Axis, LinalgError, Result},
    numeric::Numeric,
    vector::Vector,
};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// A vector whose length is known at compile time.
///
/// Pairwise operations can't fail: both operands have length `N` by
/// construction, so they are exposed as plain operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVector<T, const N: usize> {
    vals: [T; N],
}

impl<T: Numeric, const N: usize> FixedVector<T, N> {
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            vals: std::array::from_fn(f),
        }
    }

    pub fn zeros() -> Self {
        Self {
            vals: [T::zero(); N],
        }
    }

    pub fn one_hot(i: usize) -> Result<Self> {
        check_index("one_hot", Axis::Element, i, N)?;

        Ok(Self::from_fn(|idx| if idx == i { T::one() } else { T::zero() }))
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.vals
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.vals
            .iter()
            .zip(rhs.vals.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    pub fn sum_of_squares(&self) -> T {
        self.dot(self)
    }

    pub fn magnitude(&self) -> T {
        self.sum_of_squares().sqrt()
    }

    pub fn distance(&self, rhs: &Self) -> T {
        (*self - *rhs).magnitude()
    }

    pub fn sum(vectors: &[Self]) -> Result<Self> {
        check_non_empty("vector_sum", vectors.len())?;

        Ok(vectors.iter().fold(Self::zeros(), |acc, &v| acc + v))
    }

    pub fn mean(vectors: &[Self]) -> Result<Self> {
        let total = Self::sum(vectors)?;

        Ok(total * (T::one() / T::from_count(vectors.len())))
    }

    pub fn to_vector(&self) -> Vector<T> {
        Vector::from(self.vals)
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(vals: [T; N]) -> Self {
        Self { vals }
    }
}

impl<T: Numeric, const N: usize> From<FixedVector<T, N>> for Vector<T> {
    fn from(v: FixedVector<T, N>) -> Self {
        Vector::from(v.vals)
    }
}

impl<T: Numeric, const N: usize> TryFrom<Vector<T>> for FixedVector<T, N> {
    type Error = LinalgError;

    fn try_from(v: Vector<T>) -> Result<Self> {
        let len = v.len();
        let vals: [T; N] = v.into_vec().try_into().map_err(|_| {
            log::debug!("try_from: vector of length {} into FixedVector<{}>", len, N);
            LinalgError::LengthMismatch {
                left: N,
                right: len,
            }
        })?;

        Ok(Self { vals })
    }
}

impl<T: Numeric, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.vals[i] + rhs.vals[i])
    }
}

impl<T: Numeric, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.vals[i] - rhs.vals[i])
    }
}

impl<T: Numeric, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;

    fn mul(self, c: T) -> Self {
        Self::from_fn(|i| c * self.vals[i])
    }
}

impl<T: Numeric, const N: usize> Neg for FixedVector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_fn(|i| -self.vals[i])
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        &self.vals[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basics() {
        let a = FixedVector::from([1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(a[3], 4.0);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_operators() {
        let v = FixedVector::from([1.0, 2.0, 3.0]);
        let w = FixedVector::from([4.0, 5.0, 6.0]);

        assert_eq!(v + w, FixedVector::from([5.0, 7.0, 9.0]));
        assert_eq!(w - v, FixedVector::from([3.0, 3.0, 3.0]));
        assert_eq!(v * 2.0, FixedVector::from([2.0, 4.0, 6.0]));
        assert_eq!(-v, FixedVector::from([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn test_dot_product() {
        let a = FixedVector::from([1.0, 2.0, 3.0]);
        let b = FixedVector::from([4.0, 5.0, 6.0]);

        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(FixedVector::from([3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(
            FixedVector::from([0.0, 0.0]).distance(&FixedVector::from([3.0, 4.0])),
            5.0
        );
    }

    #[test]
    fn test_one_hot() {
        assert_eq!(
            FixedVector::<f64, 5>::one_hot(3).unwrap(),
            FixedVector::from([0.0, 0.0, 0.0, 1.0, 0.0]),
        );
        assert_eq!(
            FixedVector::<f64, 5>::one_hot(7),
            Err(LinalgError::IndexOutOfRange {
                axis: Axis::Element,
                index: 7,
                len: 5
            }),
        );
    }

    #[test]
    fn test_sum_and_mean() {
        let vs = [
            FixedVector::from([1.0, 2.0]),
            FixedVector::from([3.0, 4.0]),
            FixedVector::from([5.0, 6.0]),
        ];

        assert_eq!(FixedVector::sum(&vs), Ok(FixedVector::from([9.0, 12.0])));
        assert_eq!(FixedVector::mean(&vs), Ok(FixedVector::from([3.0, 4.0])));
        assert_eq!(
            FixedVector::<f64, 2>::sum(&[]),
            Err(LinalgError::EmptyInput)
        );
    }

    #[test]
    fn test_conversions() {
        let f = FixedVector::from([1.0, 2.0]);
        let v: Vector<f64> = f.into();
        assert_eq!(v, Vector::from([1.0, 2.0]));
        assert_eq!(FixedVector::<f64, 2>::try_from(v), Ok(f));

        assert_eq!(
            FixedVector::<f64, 3>::try_from(Vector::from([1.0, 2.0])),
            Err(LinalgError::LengthMismatch { left: 3, right: 2 })
        );
    }
}
