use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize, actual: usize },
    InvalidPhoneNumber { input: String },
    ValidityPeriodOutOfRange { min: u32, max: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::ValidityPeriodOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "validity period out of range: {actual} seconds (expected {min}..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "login" };
        assert_eq!(err.to_string(), "login must not be empty");

        let err = ValidationError::TooLong {
            field: "source_addr",
            max: 20,
            actual: 21,
        };
        assert_eq!(
            err.to_string(),
            "source_addr is too long: 21 characters (max 20)"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::ValidityPeriodOutOfRange {
            min: 40,
            max: 432_000,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "validity period out of range: 10 seconds (expected 40..=432000)"
        );
    }
}
