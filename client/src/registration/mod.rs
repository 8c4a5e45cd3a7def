// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod availability;
pub mod submit;

/// Context carried from a successful registration into the company details step. Lives
/// only in memory for the duration of the navigation; the password is never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationHandoff {
	pub email: String,
	pub password: String,
}
