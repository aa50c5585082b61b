use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidNumber { input: String },
    MessageTooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidNumber { input } => {
                write!(f, "not a valid mobile number: {input}")
            }
            Self::MessageTooLong { max, actual } => {
                write!(f, "message too long: {actual} chars (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
