// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::availability::AvailabilityState;
use super::RegistrationHandoff;
use crate::api::RegistrationError;
use jobseeker_shared::messages::accounts::{AccountData, RegisterAccountRequest};
use std::future::Future;
use sycamore::prelude::*;

/// Whether a registration attempt is currently running
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionState {
	Idle,
	Submitting,
}

impl SubmissionState {
	pub fn is_submitting(self) -> bool {
		matches!(self, Self::Submitting)
	}
}

/// Local conditions that block a registration attempt before anything is sent
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	EmailRequired,
	PasswordRequired,
	EmailTaken,
}

impl ValidationError {
	pub fn message(self) -> &'static str {
		match self {
			Self::EmailRequired => "Email is required",
			Self::PasswordRequired => "Password is required",
			Self::EmailTaken => "Email already exists",
		}
	}
}

/// Validates a registration attempt against local constraints and the latest resolved
/// availability. Runs synchronously on the submit tick; only a Taken availability blocks
/// the attempt, so an Unknown or still-Checking availability lets it through.
pub fn validate(email: &str, password: &str, availability: AvailabilityState) -> Result<(), ValidationError> {
	if email.trim().is_empty() {
		return Err(ValidationError::EmailRequired);
	}
	if password.trim().is_empty() {
		return Err(ValidationError::PasswordRequired);
	}
	if availability == AvailabilityState::Taken {
		return Err(ValidationError::EmailTaken);
	}
	Ok(())
}

/// Field-level and form-level error state plus the submission gate for the registration
/// form. Signals are reference-counted so views can subscribe to them while the submit
/// driver mutates them from a spawned task.
#[derive(Clone)]
pub struct RegistrationForm {
	pub email_error: RcSignal<Option<String>>,
	pub password_error: RcSignal<Option<String>>,
	pub form_error: RcSignal<Option<String>>,
	pub submission: RcSignal<SubmissionState>,
}

impl RegistrationForm {
	pub fn new() -> Self {
		Self {
			email_error: create_rc_signal(None),
			password_error: create_rc_signal(None),
			form_error: create_rc_signal(None),
			submission: create_rc_signal(SubmissionState::Idle),
		}
	}

	/// Clears the email field error; called whenever the user edits the email field.
	pub fn clear_email_error(&self) {
		self.email_error.set(None);
	}

	/// Runs one registration attempt: clears prior errors, validates, and if validation
	/// passes, performs the registration operation through `register`.
	///
	/// A trigger while a previous attempt is still running is ignored. Validation
	/// failures set the matching field error and never invoke `register`. A failure with
	/// the known email-exists code becomes an email field error; any other failure
	/// becomes a form-level error with the server's message when it provided one. Both
	/// failure paths return the form to [`SubmissionState::Idle`] so the user can retry.
	///
	/// On success the returned hand-off carries the registered email and the entered
	/// password for the next step of the flow; the form deliberately stays in
	/// [`SubmissionState::Submitting`] since the view navigates away.
	pub async fn submit<F, Fut>(
		&self,
		email: String,
		password: String,
		availability: AvailabilityState,
		register: F,
	) -> Option<RegistrationHandoff>
	where
		F: FnOnce(RegisterAccountRequest) -> Fut,
		Fut: Future<Output = Result<AccountData, RegistrationError>>,
	{
		if self.submission.get().is_submitting() {
			return None;
		}

		self.email_error.set(None);
		self.password_error.set(None);
		self.form_error.set(None);

		if let Err(error) = validate(&email, &password, availability) {
			let message = Some(String::from(error.message()));
			match error {
				ValidationError::EmailRequired | ValidationError::EmailTaken => self.email_error.set(message),
				ValidationError::PasswordRequired => self.password_error.set(message),
			}
			return None;
		}

		self.submission.set(SubmissionState::Submitting);

		let request = RegisterAccountRequest {
			email,
			password: password.clone(),
		};
		match register(request).await {
			Ok(account) => Some(RegistrationHandoff {
				email: account.email,
				password,
			}),
			Err(RegistrationError::Server(response)) if response.is_email_exists() => {
				self.email_error.set(Some(String::from("Email already exists.")));
				self.submission.set(SubmissionState::Idle);
				None
			}
			Err(RegistrationError::Server(response)) => {
				let message = response
					.error
					.unwrap_or_else(|| String::from("Registration failed. Try again."));
				self.form_error.set(Some(message));
				self.submission.set(SubmissionState::Idle);
				None
			}
			Err(error) => {
				log::error!("Registration request failed: {}", error);
				self.form_error
					.set(Some(String::from("Registration failed. Try again.")));
				self.submission.set(SubmissionState::Idle);
				None
			}
		}
	}

	/// Whether the submit control should accept a trigger. Submission is gated off while
	/// an attempt is running or while the entered email is known to be taken.
	pub fn can_submit(&self, availability: AvailabilityState) -> bool {
		!self.submission.get().is_submitting() && availability != AvailabilityState::Taken
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;
	use jobseeker_shared::messages::accounts::{AccountData, RegistrationErrorResponse};
	use std::cell::Cell;
	use std::rc::Rc;

	fn submit_with_response(
		form: &RegistrationForm,
		email: &str,
		password: &str,
		availability: AvailabilityState,
		response: Result<AccountData, RegistrationError>,
	) -> (Option<RegistrationHandoff>, bool) {
		let called = Rc::new(Cell::new(false));
		let called_flag = Rc::clone(&called);
		let handoff = block_on(form.submit(
			String::from(email),
			String::from(password),
			availability,
			move |_| {
				called_flag.set(true);
				async move { response }
			},
		));
		(handoff, called.get())
	}

	#[test]
	fn blank_email_fails_validation_without_network_call() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"   ",
			"hunter2",
			AvailabilityState::Unknown,
			Ok(AccountData {
				email: String::from("unused"),
			}),
		);

		assert!(handoff.is_none());
		assert!(!called);
		assert_eq!(*form.email_error.get(), Some(String::from("Email is required")));
		assert_eq!(*form.submission.get(), SubmissionState::Idle);
	}

	#[test]
	fn blank_password_fails_validation_without_network_call() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"",
			AvailabilityState::Available,
			Ok(AccountData {
				email: String::from("unused"),
			}),
		);

		assert!(handoff.is_none());
		assert!(!called);
		assert_eq!(*form.password_error.get(), Some(String::from("Password is required")));
	}

	#[test]
	fn taken_email_never_invokes_registration() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Taken,
			Ok(AccountData {
				email: String::from("unused"),
			}),
		);

		assert!(handoff.is_none());
		assert!(!called, "a known-taken email must block the registration call");
		assert_eq!(*form.email_error.get(), Some(String::from("Email already exists")));
		assert_eq!(*form.submission.get(), SubmissionState::Idle);
	}

	#[test]
	fn unknown_availability_does_not_block_submission() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Unknown,
			Ok(AccountData {
				email: String::from("a@b.com"),
			}),
		);

		assert!(called);
		assert!(handoff.is_some());
	}

	#[test]
	fn success_hands_off_submitted_credentials() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Available,
			Ok(AccountData {
				email: String::from("a@b.com"),
			}),
		);

		assert!(called);
		let handoff = handoff.unwrap();
		assert_eq!(handoff.email, "a@b.com");
		assert_eq!(handoff.password, "hunter2");
		assert_eq!(*form.email_error.get(), None);
		assert_eq!(*form.password_error.get(), None);
		assert_eq!(*form.form_error.get(), None);
		// The view navigates away on success; no reset back to Idle happens.
		assert_eq!(*form.submission.get(), SubmissionState::Submitting);
	}

	#[test]
	fn email_exists_race_maps_to_email_field_error() {
		let form = RegistrationForm::new();
		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Available,
			Err(RegistrationError::Server(RegistrationErrorResponse {
				code: Some(String::from("EMAIL_EXISTS")),
				error: None,
			})),
		);

		assert!(called);
		assert!(handoff.is_none());
		assert_eq!(*form.email_error.get(), Some(String::from("Email already exists.")));
		assert_eq!(*form.form_error.get(), None);
		assert_eq!(*form.submission.get(), SubmissionState::Idle);
	}

	#[test]
	fn other_server_failure_sets_form_error_with_server_message() {
		let form = RegistrationForm::new();
		let (handoff, _) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Available,
			Err(RegistrationError::Server(RegistrationErrorResponse {
				code: None,
				error: Some(String::from("Password is too weak.")),
			})),
		);

		assert!(handoff.is_none());
		assert_eq!(*form.form_error.get(), Some(String::from("Password is too weak.")));
		assert_eq!(*form.submission.get(), SubmissionState::Idle);
	}

	#[test]
	fn transport_failure_sets_generic_form_error() {
		let form = RegistrationForm::new();
		let (handoff, _) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Available,
			Err(RegistrationError::Transport(gloo_net::Error::GlooError(String::from(
				"connection reset",
			)))),
		);

		assert!(handoff.is_none());
		assert_eq!(
			*form.form_error.get(),
			Some(String::from("Registration failed. Try again."))
		);
		assert_eq!(*form.submission.get(), SubmissionState::Idle);
	}

	#[test]
	fn reentrant_submit_is_ignored() {
		let form = RegistrationForm::new();
		form.submission.set(SubmissionState::Submitting);

		let (handoff, called) = submit_with_response(
			&form,
			"a@b.com",
			"hunter2",
			AvailabilityState::Available,
			Ok(AccountData {
				email: String::from("a@b.com"),
			}),
		);

		assert!(handoff.is_none());
		assert!(!called, "a submit while one is already running must be ignored");
	}

	#[test]
	fn submit_gate_blocks_taken_and_submitting() {
		let form = RegistrationForm::new();
		assert!(form.can_submit(AvailabilityState::Unknown));
		assert!(form.can_submit(AvailabilityState::Available));
		assert!(form.can_submit(AvailabilityState::Checking));
		assert!(!form.can_submit(AvailabilityState::Taken));

		form.submission.set(SubmissionState::Submitting);
		assert!(!form.can_submit(AvailabilityState::Available));
	}

	#[test]
	fn errors_cleared_at_start_of_each_attempt() {
		let form = RegistrationForm::new();
		form.form_error.set(Some(String::from("stale form error")));
		form.password_error.set(Some(String::from("stale password error")));

		let (_, _) = submit_with_response(
			&form,
			"",
			"hunter2",
			AvailabilityState::Unknown,
			Ok(AccountData {
				email: String::from("unused"),
			}),
		);

		assert_eq!(*form.form_error.get(), None);
		assert_eq!(*form.password_error.get(), None);
		assert_eq!(*form.email_error.get(), Some(String::from("Email is required")));
	}
}
