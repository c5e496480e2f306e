use thiserror::Error;

/// Shared HR result type.
pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HrError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid role: {0:?}")]
    InvalidRole(String),
    #[error("roster capacity must be between {min} and {max}, got {0}", min = crate::MIN_CAPACITY, max = crate::MAX_CAPACITY)]
    InvalidCapacity(usize),
}

impl HrError {
    pub fn code(&self) -> &'static str {
        match self {
            HrError::InvalidArgument(_) => "INVALID_ARGUMENT",
            HrError::InvalidRole(_) => "INVALID_ROLE",
            HrError::InvalidCapacity(_) => "INVALID_CAPACITY",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_names_bounds() {
        let err = HrError::InvalidCapacity(9);
        assert_eq!(err.to_string(), "roster capacity must be between 2 and 5, got 9");
        assert_eq!(err.code(), "INVALID_CAPACITY");
    }
}
