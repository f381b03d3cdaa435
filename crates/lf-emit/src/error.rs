use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    EmptyName,
    UnknownDimension { index: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "dimension and variable names must be non-empty"),
            Self::UnknownDimension { index } => {
                write!(f, "unknown dimension index {index}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "variable length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for EmitError {}
