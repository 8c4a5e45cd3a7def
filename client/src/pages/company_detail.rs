use crate::registration::RegistrationHandoff;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn EmployerCompanyDetailView<G: Html>(ctx: Scope) -> View<G> {
	let handoff_signal: &Signal<Option<RegistrationHandoff>> = use_context(ctx);
	let handoff = match (*handoff_signal.get()).clone() {
		Some(handoff) => handoff,
		None => {
			// Landing here without a registration hand-off means the page was reached
			// directly; there is no account context to continue with.
			spawn_local_scoped(ctx, async {
				navigate("/employer/register");
			});
			return view! { ctx, };
		}
	};

	let email = handoff.email;

	view! {
		ctx,
		div(id="employer_register_complete") {
			h1 {
				"Registration complete!"
			}
			p {
				"Your account " (email) " has been created."
			}
			p {
				"Continue by filling in your company details."
			}
		}
	}
}
