//! Element value errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementValueError {
    #[error("Field {field} must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Field {field} is {value}, expected {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ElementValueError::OutOfRange {
            field: "level".to_string(),
            value: 9,
            min: 1,
            max: 6,
        };
        assert_eq!(err.to_string(), "Field level is 9, expected 1..=6");
    }

    #[test]
    fn test_invalid_type_display() {
        let err = ElementValueError::InvalidType {
            field: "value".to_string(),
            expected: "a string",
        };
        assert!(err.to_string().contains("a string"));
    }
}
