use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code the server sends when a registration attempt loses the race for an email
/// address that checked out as available moments earlier.
pub const EMAIL_EXISTS_CODE: &str = "EMAIL_EXISTS";

/// Response data from the server for an email availability check
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmailCheckResponse {
	pub exists: bool,
}

/// Data sent to the server when trying to register an employer account
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterAccountRequest {
	pub email: String,
	pub password: String,
}

/// Account data the server returns for a successful registration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AccountData {
	pub email: String,
}

/// Structured error data the server returns for a failed registration attempt. Both fields
/// are optional; absent fields fall back to client-side handling.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RegistrationErrorResponse {
	pub code: Option<String>,
	pub error: Option<String>,
}

impl RegistrationErrorResponse {
	/// Whether this error is the known email-taken race between the last availability
	/// check and the registration attempt.
	pub fn is_email_exists(&self) -> bool {
		self.code.as_deref() == Some(EMAIL_EXISTS_CODE)
	}
}

impl fmt::Display for RegistrationErrorResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (&self.code, &self.error) {
			(Some(code), Some(error)) => write!(f, "{} ({})", error, code),
			(Some(code), None) => write!(f, "{}", code),
			(None, Some(error)) => write!(f, "{}", error),
			(None, None) => write!(f, "registration failed"),
		}
	}
}
