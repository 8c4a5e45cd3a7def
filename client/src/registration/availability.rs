// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiError;
use jobseeker_shared::messages::accounts::EmailCheckResponse;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use sycamore::prelude::*;

/// How long the email field must be quiet before an availability check is issued
pub const EMAIL_CHECK_DEBOUNCE_MILLIS: u32 = 500;

/// What we know about the availability of the currently entered email address
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AvailabilityState {
	/// No check has resolved for the current input (never checked, superseded, or the
	/// check failed)
	Unknown,
	/// A check for the current input is in flight
	Checking,
	Available,
	Taken,
}

impl AvailabilityState {
	pub fn is_checking(self) -> bool {
		matches!(self, Self::Checking)
	}

	fn from_exists(exists: bool) -> Self {
		if exists {
			Self::Taken
		} else {
			Self::Available
		}
	}
}

/// Identifies one scheduled availability check. A token is current until the next input
/// mutation issues a newer one; anything a stale token's task would do is discarded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckToken(u64);

/// Tracks availability of the email address being typed into the registration form.
///
/// The checker owns the one critical race-avoidance invariant of the form: of all
/// overlapping checks started by fast typing, only the one belonging to the most recent
/// input may mutate [`AvailabilityState`]. Debounce cancellation and in-flight staleness
/// both fall out of the same monotonic sequence number: callers take a token when input
/// changes, sleep out the quiet period, then run the check through [`run_check`], which
/// verifies token currency before issuing the query and again before applying its result.
///
/// Clones share state, so a clone can be moved into a spawned task.
///
/// [`run_check`]: AvailabilityChecker::run_check
#[derive(Clone)]
pub struct AvailabilityChecker {
	state: RcSignal<AvailabilityState>,
	sequence: Rc<Cell<u64>>,
}

impl AvailabilityChecker {
	pub fn new() -> Self {
		Self {
			state: create_rc_signal(AvailabilityState::Unknown),
			sequence: Rc::new(Cell::new(0)),
		}
	}

	pub fn state(&self) -> &RcSignal<AvailabilityState> {
		&self.state
	}

	/// Registers a mutation of the email input. Any previously issued token becomes
	/// stale, and the availability of the new value is unknown until its own check
	/// resolves.
	pub fn note_input(&self) -> CheckToken {
		let sequence = self.sequence.get() + 1;
		self.sequence.set(sequence);
		self.state.set(AvailabilityState::Unknown);
		CheckToken(sequence)
	}

	/// Registers the email input being cleared. Any pending check is cancelled (its
	/// token goes stale before a query can be issued) while the last resolved state is
	/// left as it was.
	pub fn note_cleared(&self) {
		self.sequence.set(self.sequence.get() + 1);
	}

	pub fn is_current(&self, token: CheckToken) -> bool {
		self.sequence.get() == token.0
	}

	/// Runs the availability check for `email`, to be called after the debounce quiet
	/// period has elapsed. If `token` was superseded during the quiet period, no query is
	/// issued at all; if it was superseded while the query was in flight, the result is
	/// discarded. A failed query is logged and degrades to
	/// [`AvailabilityState::Unknown`] rather than surfacing an error.
	pub async fn run_check<F, Fut>(&self, token: CheckToken, email: String, check: F)
	where
		F: FnOnce(String) -> Fut,
		Fut: Future<Output = Result<EmailCheckResponse, ApiError>>,
	{
		if !self.is_current(token) {
			return;
		}
		self.state.set(AvailabilityState::Checking);

		let result = check(email).await;
		if !self.is_current(token) {
			return;
		}
		match result {
			Ok(response) => self.state.set(AvailabilityState::from_exists(response.exists)),
			Err(error) => {
				log::error!("Email availability check failed: {}", error);
				self.state.set(AvailabilityState::Unknown);
			}
		}
	}
}
