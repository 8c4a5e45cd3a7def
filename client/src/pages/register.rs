// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{self, ApiConfig};
use crate::registration::availability::{AvailabilityChecker, AvailabilityState, EMAIL_CHECK_DEBOUNCE_MILLIS};
use crate::registration::submit::RegistrationForm;
use crate::registration::RegistrationHandoff;
use gloo_timers::future::TimeoutFuture;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

// Availability hints only appear once the input is plausibly long enough to be an address.
const AVAILABILITY_HINT_MIN_LENGTH: usize = 4;

#[component]
pub fn EmployerRegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &ApiConfig = use_context(ctx);

	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let checker = create_ref(ctx, AvailabilityChecker::new());
	let form = create_ref(ctx, RegistrationForm::new());

	// Debounced availability check. Each edit of a non-empty address supersedes whatever
	// check the previous edit scheduled; the token comparison inside run_check makes the
	// superseded task a no-op whether it was still waiting out the quiet period or
	// already had a query in flight. Clearing the field cancels any pending check
	// without touching the last resolved state.
	create_effect(ctx, move || {
		let email = (*email_signal.get()).clone();
		if email.is_empty() {
			checker.note_cleared();
			return;
		}

		form.clear_email_error();
		let token = checker.note_input();
		spawn_local_scoped(ctx, async move {
			TimeoutFuture::new(EMAIL_CHECK_DEBOUNCE_MILLIS).await;
			checker
				.run_check(token, email, |email| api::check_email_exists(config, email))
				.await;
		});
	});

	let email_checking_signal = create_memo(ctx, || checker.state().get().is_checking());
	let availability_signal = create_memo(ctx, || *checker.state().get());
	let email_error_signal = create_memo(ctx, || (*form.email_error.get()).clone());
	let password_error_signal = create_memo(ctx, || (*form.password_error.get()).clone());
	let form_error_signal = create_memo(ctx, || (*form.form_error.get()).clone());
	let submitting_signal = create_memo(ctx, || form.submission.get().is_submitting());
	let submit_disabled_signal = create_memo(ctx, || !form.can_submit(*checker.state().get()));

	let email_error_class_signal = create_memo(ctx, || {
		if email_error_signal.get().is_some() {
			"error"
		} else {
			""
		}
	});
	let password_error_class_signal = create_memo(ctx, || {
		if password_error_signal.get().is_some() {
			"error"
		} else {
			""
		}
	});

	let show_email_taken_signal = create_memo(ctx, || {
		!*email_checking_signal.get()
			&& *availability_signal.get() == AvailabilityState::Taken
			&& email_signal.get().len() >= AVAILABILITY_HINT_MIN_LENGTH
	});
	let show_email_available_signal = create_memo(ctx, || {
		!*email_checking_signal.get()
			&& *availability_signal.get() == AvailabilityState::Available
			&& email_signal.get().len() >= AVAILABILITY_HINT_MIN_LENGTH
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let email = (*email_signal.get()).clone();
		let password = (*password_signal.get()).clone();
		let availability = *checker.state().get();

		spawn_local_scoped(ctx, async move {
			let handoff = form
				.submit(email, password, availability, |request| async move {
					api::register_account(config, &request).await
				})
				.await;

			if let Some(handoff) = handoff {
				let handoff_signal: &Signal<Option<RegistrationHandoff>> = use_context(ctx);
				handoff_signal.set(Some(handoff));
				navigate("/employer/company/detail");
			}
		});
	};

	view! {
		ctx,
		h1 { "Register as an employer" }
		(
			if let Some(message) = (*form_error_signal.get()).clone() {
				view! {
					ctx,
					div(id="employer_register_form_error", class="form_error") {
						(message)
					}
				}
			} else {
				view! { ctx, }
			}
		)
		form(id="employer_register", on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="register_email") {
					"Email Address: "
				}
				input(id="register_email", type="email", class=*email_error_class_signal.get(), bind:value=email_signal)
				(
					if *email_checking_signal.get() {
						view! {
							ctx,
							span(id="register_email_checking", class="input_info") {
								"Checking email..."
							}
						}
					} else {
						view! { ctx, }
					}
				)
				(
					if *show_email_taken_signal.get() {
						view! {
							ctx,
							span(id="register_email_taken_warning", class="input_error register_email_message") {
								"Email already exists"
							}
						}
					} else {
						view! { ctx, }
					}
				)
				(
					if *show_email_available_signal.get() {
						view! {
							ctx,
							span(id="register_email_available_notice", class="input_ok register_email_message") {
								"Email available"
							}
						}
					} else {
						view! { ctx, }
					}
				)
				(
					if let Some(message) = (*email_error_signal.get()).clone() {
						view! {
							ctx,
							span(id="register_email_error", class="input_error register_email_message") {
								(message)
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
			div(class="input_with_message") {
				label(for="register_password") {
					"Password: "
				}
				input(id="register_password", type="password", class=*password_error_class_signal.get(), bind:value=password_signal)
				(
					if let Some(message) = (*password_error_signal.get()).clone() {
						view! {
							ctx,
							span(id="register_password_error", class="input_error") {
								(message)
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
			button(disabled=*submit_disabled_signal.get()) {
				(
					if *submitting_signal.get() {
						"Checking..."
					} else {
						"Register"
					}
				)
			}
		}
		p {
			"Already have your account? "
			a(href="/employer/sign-in") {
				"Sign In"
			}
		}
	}
}
