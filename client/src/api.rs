// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use jobseeker_shared::messages::accounts::{
	AccountData, EmailCheckResponse, RegisterAccountRequest, RegistrationErrorResponse,
};
use std::fmt;
use web_sys::Url;

/// Base address for the backend API, passed explicitly to every request rather than read
/// from ambient global state.
#[derive(Clone, Debug)]
pub struct ApiConfig {
	base_url: String,
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url }
	}

	/// Derives the API base address from the address at which the application is hosted,
	/// adapting to any URL structure it could be served under.
	///
	/// # Panics
	///
	/// This function panics when the browser context (window, location, URL, etc.) is
	/// inaccessible.
	pub fn from_window_location() -> Self {
		let js_location = web_sys::window()
			.expect("Failed to get browser window context")
			.location();
		let web_endpoint = js_location.href().expect("Failed to get current address");
		let url = Url::new(&web_endpoint).expect("Failed to generate URL instance");
		url.set_search(""); // Query string is unnecessary and should be cleared
		let url_path = url.pathname();
		let api_path = if let Some(path) = url_path.strip_suffix('/') {
			format!("{}/api", path)
		} else {
			format!("{}/api", url_path)
		};
		url.set_pathname(&api_path);
		Self::new(String::from(url.to_string()))
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}
}

/// Errors that can occur when querying email availability
#[derive(Debug)]
pub enum ApiError {
	Network(gloo_net::Error),
	BadStatus(u16),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::BadStatus(status) => write!(f, "The server responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

/// Errors that can occur when submitting a registration
#[derive(Debug)]
pub enum RegistrationError {
	Transport(gloo_net::Error),
	Server(RegistrationErrorResponse),
}

impl fmt::Display for RegistrationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to reach the registration service: {}", error),
			Self::Server(response) => write!(f, "The server rejected the registration: {}", response),
		}
	}
}

impl From<gloo_net::Error> for RegistrationError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Transport(error)
	}
}

/// Asks the backend whether an account with the given email address already exists.
pub async fn check_email_exists(config: &ApiConfig, email: String) -> Result<EmailCheckResponse, ApiError> {
	let response = gloo_net::http::Request::get(&config.endpoint("/accounts/check-email/"))
		.query([("email", email.as_str())])
		.send()
		.await?;
	if !response.ok() {
		return Err(ApiError::BadStatus(response.status()));
	}
	Ok(response.json().await?)
}

/// Submits a registration attempt. A non-success response is decoded into the server's
/// structured error when possible so the caller can tell an email-exists race apart from
/// other failures.
pub async fn register_account(
	config: &ApiConfig,
	registration: &RegisterAccountRequest,
) -> Result<AccountData, RegistrationError> {
	let response = gloo_net::http::Request::post(&config.endpoint("/employer/register/"))
		.json(registration)?
		.send()
		.await?;
	if !response.ok() {
		let error_response = response.json().await.unwrap_or_default();
		return Err(RegistrationError::Server(error_response));
	}
	Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_joins_base_and_path() {
		let config = ApiConfig::new("https://jobs.example/api");
		assert_eq!(
			config.endpoint("/accounts/check-email/"),
			"https://jobs.example/api/accounts/check-email/"
		);
	}

	#[test]
	fn trailing_slashes_on_base_are_dropped() {
		let config = ApiConfig::new("https://jobs.example/api/");
		assert_eq!(
			config.endpoint("/employer/register/"),
			"https://jobs.example/api/employer/register/"
		);
	}
}
