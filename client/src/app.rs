// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiConfig;
use crate::pages::company_detail::EmployerCompanyDetailView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::EmployerRegistrationView;
use crate::pages::start_redirect::StartRedirectView;
use crate::registration::RegistrationHandoff;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoute {
	#[to("/")]
	Start,
	#[to("/employer/register")]
	EmployerRegister,
	#[to("/employer/company/detail")]
	EmployerCompanyDetail,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	provide_context(ctx, ApiConfig::from_window_location());

	// Hand-off data from a completed registration to the company details step. In-memory
	// only; navigating away from the flow discards it.
	let handoff_signal = create_signal(ctx, Option::<RegistrationHandoff>::None);
	provide_context_ref(ctx, handoff_signal);

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					(match route.get().as_ref() {
						AppRoute::Start => view! { ctx, StartRedirectView {} },
						AppRoute::EmployerRegister => view! { ctx, EmployerRegistrationView {} },
						AppRoute::EmployerCompanyDetail => view! { ctx, EmployerCompanyDetailView {} },
						AppRoute::NotFound => view! { ctx, NotFoundView {} },
					})
				}
			}
		)
	}
}
