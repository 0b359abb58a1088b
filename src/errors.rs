use std::fmt::{Display, Formatter};

/// Which dimension an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
    Element,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
            Self::Element => write!(f, "element"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("no vectors were provided")]
    EmptyInput,

    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid sampling range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}

pub type Result<T> = std::result::Result<T, LinalgError>;

pub(crate) fn check_same_len(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        log::debug!("{}: operands have lengths {} and {}", op, left, right);
        return Err(LinalgError::LengthMismatch { left, right });
    }
    Ok(())
}

pub(crate) fn check_index(op: &'static str, axis: Axis, index: usize, len: usize) -> Result<()> {
    if index >= len {
        log::debug!("{}: {} index {} not below {}", op, axis, index, len);
        return Err(LinalgError::IndexOutOfRange { axis, index, len });
    }
    Ok(())
}

pub(crate) fn check_non_empty(op: &'static str, count: usize) -> Result<()> {
    if count == 0 {
        log::debug!("{}: called with no vectors", op);
        return Err(LinalgError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LinalgError::LengthMismatch { left: 2, right: 3 }.to_string(),
            "length mismatch: 2 vs 3"
        );
        assert_eq!(
            LinalgError::IndexOutOfRange {
                axis: Axis::Column,
                index: 4,
                len: 3
            }
            .to_string(),
            "column index 4 out of range for length 3"
        );
        assert_eq!(LinalgError::EmptyInput.to_string(), "no vectors were provided");
    }

    #[test]
    fn test_guards() {
        assert_eq!(check_same_len("add", 3, 3), Ok(()));
        assert_eq!(
            check_same_len("add", 3, 4),
            Err(LinalgError::LengthMismatch { left: 3, right: 4 })
        );
        assert!(check_index("get_row", Axis::Row, 0, 1).is_ok());
        assert!(check_index("get_row", Axis::Row, 1, 1).is_err());
        assert_eq!(check_non_empty("vector_sum", 0), Err(LinalgError::EmptyInput));
    }
}
