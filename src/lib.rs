//! Small vector and matrix arithmetic primitives.
//!
//! [`Vector`] and [`Matrix`] are plain owned containers over a [`Numeric`]
//! element type. Every operation returns a new container and leaves its inputs
//! untouched; size mismatches come back as [`LinalgError`] instead of panics.
//!
//! ```
//! use vectrus::{ops, Matrix, Vector};
//!
//! let v = Vector::from([1.0, 2.0, 3.0]);
//! let w = Vector::from([4.0, 5.0, 6.0]);
//! assert_eq!(ops::dot(&v, &w).unwrap(), 32.0);
//!
//! let i: Matrix<f64> = ops::identity_matrix(3);
//! assert_eq!(ops::get_row(&i, 1).unwrap(), Vector::from([0.0, 1.0, 0.0]));
//! ```

pub mod distribution;
pub mod errors;
pub mod fixed;
pub mod iterator;
pub mod matrix;
pub mod numeric;
pub mod ops;
pub mod vector;

pub use errors::{Axis, LinalgError, Result};
pub use fixed::FixedVector;
pub use matrix::Matrix;
pub use numeric::Numeric;
pub use vector::Vector;
