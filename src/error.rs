use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// Both operands of a binary operator are sequences of different length.
    #[error("Dimensions {left} and {right} are not compatible")]
    DimensionMismatch { left: usize, right: usize },
    /// An interval degree whose lower bound exceeds its upper bound.
    #[error("Lower membership {lower} is higher than upper membership {upper}")]
    InvalidInterval { lower: f64, upper: f64 },
    #[error("Value {value} is outside of the domain [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },
    #[error("Values of length {found} mismatch the domain table of length {expected}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("Cannot combine {found} degree with {expected} degree")]
    IncompatibleDegree {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Unsupported {field}: {value}")]
    UnsupportedConfiguration { field: &'static str, value: String },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("No membership degree assigned to {0}")]
    MissingClause(String),
    #[error("Function parameters contain value for input {0} which was not provided")]
    MissingInput(String),
}

pub type Result<T> = std::result::Result<T, FuzzyError>;

impl FuzzyError {
    pub(crate) fn unsupported(field: &'static str, value: impl ToString) -> Self {
        FuzzyError::UnsupportedConfiguration {
            field,
            value: value.to_string(),
        }
    }
}
