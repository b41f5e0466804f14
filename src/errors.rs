use thiserror::Error;

/// Errors raised by the distance resolver and the pair generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GranthamError {
    /// An element of `argument` is not one of the 20 standard three-letter codes
    #[error("`{argument}` must contain only valid three-letter amino acid codes, found '{code}'")]
    InvalidAminoAcidCode { argument: &'static str, code: String },
    /// Neither equal length nor one of length 1
    #[error("`x` and `y` have incompatible lengths ({x} and {y}), one of them must have length 1 or both the same length")]
    IncompatibleLength { x: usize, y: usize },
    #[error("'{0}' is not a valid method, expected 'original' or 'exact'")]
    InvalidMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_message_names_argument() {
        let err = GranthamError::InvalidAminoAcidCode {
            argument: "y",
            code: "XXX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`y` must contain only valid three-letter amino acid codes, found 'XXX'"
        );
    }

    #[test]
    fn incompatible_length_message_contains_lengths() {
        let err = GranthamError::IncompatibleLength { x: 2, y: 3 };
        assert!(err.to_string().contains("(2 and 3)"));
    }

    #[test]
    fn invalid_method_message() {
        let err = GranthamError::InvalidMethod("fuzzy".to_string());
        assert_eq!(
            err.to_string(),
            "'fuzzy' is not a valid method, expected 'original' or 'exact'"
        );
    }
}
