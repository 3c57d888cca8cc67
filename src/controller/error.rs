use thiserror::Error;

/// Local form validation failure, reported to the visitor as a toast.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("email address is empty")]
    EmptyEmail,
}

/// Any non-empty string is accepted; there is no format check.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_input_is_rejected() {
        assert_eq!(validate_email(""), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("not an email"), Ok(()));
        assert_eq!(validate_email(" "), Ok(()));
    }
}
