use crate::state::{AuthFormState, NoteFormState};
use notetaker_auth::SignupDetails;

pub const EMAIL_REQUIRED: &str = "Please enter your email first";
pub const ALL_FIELDS_REQUIRED: &str = "Please fill in all fields";
pub const NOTE_FIELDS_REQUIRED: &str = "Please fill in both title and content";
pub const OTP_NOT_SENT: &str = "Please send the OTP first";

/// Validate the email an OTP should be sent to
pub fn validate_otp_email(form: &AuthFormState) -> Result<String, String> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED.to_string());
    }
    Ok(email.to_string())
}

/// Validate and build the signup request from form state
pub fn validate_signup(form: &AuthFormState) -> Result<SignupDetails, String> {
    let details = SignupDetails {
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        dob: form.dob.trim().to_string(),
        otp: form.otp.trim().to_string(),
    };

    let missing = [
        &details.full_name,
        &details.email,
        &details.dob,
        &details.otp,
    ]
    .iter()
    .any(|value| value.is_empty());

    if missing {
        return Err(ALL_FIELDS_REQUIRED.to_string());
    }
    Ok(details)
}

/// Validate signin credentials, returning `(email, otp)`
pub fn validate_signin(form: &AuthFormState) -> Result<(String, String), String> {
    let email = form.email.trim();
    let otp = form.otp.trim();
    if email.is_empty() || otp.is_empty() {
        return Err(ALL_FIELDS_REQUIRED.to_string());
    }
    Ok((email.to_string(), otp.to_string()))
}

/// Validate a note form, returning `(title, content)`.
///
/// Whitespace-only input counts as empty. The title is stored trimmed, the
/// content as typed.
pub fn validate_note(form: &NoteFormState) -> Result<(String, String), String> {
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        return Err(NOTE_FIELDS_REQUIRED.to_string());
    }
    Ok((form.title.trim().to_string(), form.content.clone()))
}
