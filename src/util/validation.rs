//! Client-side form validation.
//!
//! Validation failures are local: they block submission and never reach the
//! network. Each failure names the field it belongs to so forms can render
//! the message next to the input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, PostDraft, SignupForm};

pub const EMAIL_MESSAGE: &str = "Email cannot contain spaces or commas.";
pub const PASSWORD_MESSAGE: &str = "Password cannot contain spaces or commas.";
pub const USERNAME_MESSAGE: &str = "Username cannot contain spaces or commas.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Title,
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// One or more characters, none of them whitespace or a comma.
pub fn is_compact_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == ',')
}

/// Validate login credentials, failing fast on the first bad field.
///
/// # Errors
///
/// Returns the email error first, then the password error.
pub fn validate_login(credentials: &Credentials) -> Result<(), FieldError> {
    if !is_compact_token(&credentials.email) {
        return Err(FieldError::new(Field::Email, EMAIL_MESSAGE));
    }
    if !is_compact_token(&credentials.password) {
        return Err(FieldError::new(Field::Password, PASSWORD_MESSAGE));
    }
    Ok(())
}

/// Validate the signup form, failing fast in field order.
///
/// # Errors
///
/// Returns the first offending field: username, email, password, then the
/// confirmation mismatch.
pub fn validate_signup(form: &SignupForm) -> Result<(), FieldError> {
    if !is_compact_token(&form.username) {
        return Err(FieldError::new(Field::Username, USERNAME_MESSAGE));
    }
    validate_login(&Credentials { email: form.email.clone(), password: form.password.clone() })?;
    if form.password != form.confirm_password {
        return Err(FieldError::new(Field::ConfirmPassword, PASSWORD_MISMATCH_MESSAGE));
    }
    Ok(())
}

/// Validate a post draft. Both fields are checked and reported together;
/// attached images never affect the outcome.
///
/// # Errors
///
/// Returns every missing field.
pub fn validate_post(draft: &PostDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if draft.title.is_empty() {
        errors.push(FieldError::new(Field::Title, TITLE_REQUIRED));
    }
    if draft.content.is_empty() {
        errors.push(FieldError::new(Field::Content, CONTENT_REQUIRED));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
