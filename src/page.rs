use yew::prelude::*;

mod account;
pub use account::*;
mod dashboard;
pub use dashboard::*;
mod import;
pub use import::*;
mod index;
pub use index::*;
mod mapping;
pub use mapping::*;
mod products;
pub use products::*;
mod settings;
pub use settings::*;

#[function_component]
pub fn NotFound() -> Html {
	html! {
		<div class="container py-5 text-center">
			<h1>{"404: Page not found"}</h1>
			<yew_router::prelude::Link<crate::Route> to={crate::Route::Home}>{"Back to the start"}</yew_router::prelude::Link<crate::Route>>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct TitleProps {
	icon: &'static str,
	title: AttrValue,
	subtitle: AttrValue,
	#[prop_or_default]
	children: Html,
}

/// Page heading with an optional action on the right.
#[function_component]
fn PageTitle(TitleProps { icon, title, subtitle, children }: &TitleProps) -> Html {
	html! {
		<div class="d-flex align-items-center justify-content-between mb-4">
			<div>
				<h1 class="h3 d-flex align-items-center">
					<i class={classes!("bi", *icon, "text-primary", "me-2")} />
					{title}
				</h1>
				<p class="text-secondary mb-0">{subtitle}</p>
			</div>
			{children.clone()}
		</div>
	}
}
