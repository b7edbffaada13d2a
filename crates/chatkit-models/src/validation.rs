//! Argument validation shared by the facade operations.
//!
//! Every check runs before any token is signed or request is sent, and
//! failures name the offending field.

use chatkit_core::ChatkitError;
use validator::{Validate, ValidationErrors};

/// Fails with [`ChatkitError::Validation`] when `value` is empty or blank.
pub fn require_id(field: &str, value: &str) -> Result<(), ChatkitError> {
    if value.trim().is_empty() {
        return Err(ChatkitError::validation(field));
    }
    Ok(())
}

/// Fails when `ids` is empty or any id in it is blank.
pub fn require_ids<S: AsRef<str>>(field: &str, ids: &[S]) -> Result<(), ChatkitError> {
    if ids.is_empty() || ids.iter().any(|id| id.as_ref().trim().is_empty()) {
        return Err(ChatkitError::validation(field));
    }
    Ok(())
}

/// Runs the DTO's `validator` rules and reports the first failing field.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), ChatkitError> {
    dto.validate()
        .map_err(|errors| ChatkitError::validation(first_invalid_field(&errors)))
}

// Sorted so the reported field is stable across runs.
fn first_invalid_field(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
        .into_iter()
        .next()
        .unwrap_or_else(|| "valid request body".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_require_id_rejects_blank() {
        assert!(require_id("user_id", "alice").is_ok());
        for blank in ["", "   "] {
            let err = require_id("user_id", blank).unwrap_err();
            assert!(matches!(err, ChatkitError::Validation { ref field } if field == "user_id"));
        }
    }

    #[test]
    fn test_require_ids() {
        assert!(require_ids("user_ids", &["a", "b"]).is_ok());
        assert!(require_ids::<&str>("user_ids", &[]).is_err());
        assert!(require_ids("user_ids", &["a", ""]).is_err());
    }

    #[test]
    fn test_validate_dto_names_field() {
        let err = validate_dto(&Named {
            name: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, ChatkitError::Validation { ref field } if field == "name"));

        assert!(
            validate_dto(&Named {
                name: "Alice".to_string()
            })
            .is_ok()
        );
    }
}
