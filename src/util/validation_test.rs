use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

fn draft(title: &str, content: &str) -> PostDraft {
    PostDraft { title: title.to_owned(), content: content.to_owned() }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_accepts_compact_credentials() {
    assert_eq!(validate_login(&creds("a@b.com", "secret")), Ok(()));
}

#[test]
fn login_rejects_email_with_space_or_comma() {
    for email in ["a @b.com", "a,b@c.com", " a@b.com", "a@b.com\t", ""] {
        let err = validate_login(&creds(email, "secret")).unwrap_err();
        assert_eq!(err.field, Field::Email, "email {email:?}");
        assert_eq!(err.message, EMAIL_MESSAGE);
    }
}

#[test]
fn login_rejects_password_with_space_or_comma() {
    for password in ["sec ret", "sec,ret", "secret\n", ""] {
        let err = validate_login(&creds("a@b.com", password)).unwrap_err();
        assert_eq!(err.field, Field::Password, "password {password:?}");
        assert_eq!(err.message, PASSWORD_MESSAGE);
    }
}

#[test]
fn login_reports_email_before_password() {
    let err = validate_login(&creds("a b", "c,d")).unwrap_err();
    assert_eq!(err.field, Field::Email);
}

// =============================================================
// Signup
// =============================================================

fn signup(username: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        username: username.to_owned(),
        email: "a@b.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn signup_accepts_matching_passwords() {
    assert_eq!(validate_signup(&signup("alice", "pw1", "pw1")), Ok(()));
}

#[test]
fn signup_rejects_username_with_space() {
    assert_eq!(validate_signup(&signup("al ice", "pw1", "pw1")).unwrap_err().field, Field::Username);
}

#[test]
fn signup_rejects_mismatched_confirmation() {
    let err = validate_signup(&signup("alice", "pw1", "pw2")).unwrap_err();
    assert_eq!(err, FieldError { field: Field::ConfirmPassword, message: PASSWORD_MISMATCH_MESSAGE });
}

// =============================================================
// Post form
// =============================================================

#[test]
fn post_requires_title() {
    let errors = validate_post(&draft("", "body")).unwrap_err();
    assert_eq!(errors, vec![FieldError { field: Field::Title, message: TITLE_REQUIRED }]);
}

#[test]
fn post_requires_content() {
    let errors = validate_post(&draft("title", "")).unwrap_err();
    assert_eq!(errors, vec![FieldError { field: Field::Content, message: CONTENT_REQUIRED }]);
}

#[test]
fn post_reports_both_missing_fields() {
    let fields: Vec<_> = validate_post(&draft("", "")).unwrap_err().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Title, Field::Content]);
}

#[test]
fn post_accepts_both_fields_present() {
    assert_eq!(validate_post(&draft("title", "body")), Ok(()));
}
