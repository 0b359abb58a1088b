use rand::distr::uniform::SampleUniform;

/// Element type for vectors and matrices.
pub trait Numeric:
    num::Float
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::MulAssign
    + std::ops::AddAssign
    + std::iter::Sum
    + SampleUniform
    + Send
    + Sync
    + 'static
{
    /// Converts a count to this type, for dividing by the number of items.
    fn from_count(n: usize) -> Self {
        // f32/f64 can represent every usize, if only approximately
        <Self as num::NumCast>::from(n).unwrap_or_else(Self::infinity)
    }
}

impl Numeric for f32 {}
impl Numeric for f64 {}
