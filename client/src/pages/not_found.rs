use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating fallback page for unknown location");

	view! {
		ctx,
		h1 { "Page not found" }
		p { "There's nothing at this address." }
		p {
			a(href="/employer/register") {
				"Go to employer registration?"
			}
		}
	}
}
