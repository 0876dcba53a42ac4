use crate::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

static FEATURES: [(&str, &str, &str); 3] = [
	(
		"bi-diagram-3",
		"Smart Mapping",
		"Map your CSV data to WooCommerce product fields with suggestions taken from your headers.",
	),
	(
		"bi-lightning-charge",
		"Fast Imports",
		"Work through large product catalogs one row at a time with live progress.",
	),
	(
		"bi-shield-check",
		"Secure Integration",
		"Connect to your WooCommerce store with its REST API credentials.",
	),
];

static STEPS: [(&str, &str); 4] = [
	("Connect", "Link your WooCommerce store with its API credentials"),
	("Upload", "Upload your product data in CSV format"),
	("Map", "Map CSV columns to WooCommerce product fields"),
	("Import", "Process your import and start selling"),
];

#[function_component]
pub fn Index() -> Html {
	let features = FEATURES.iter().map(|(icon, title, text)| {
		html! {
			<div class="col-md-4">
				<div class="card h-100 p-3">
					<i class={classes!("bi", *icon, "fs-2", "text-primary")} />
					<h3 class="h5 mt-3">{*title}</h3>
					<p class="text-secondary mb-0">{*text}</p>
				</div>
			</div>
		}
	});
	let steps = STEPS.iter().enumerate().map(|(idx, (title, text))| {
		html! {
			<div class="col-md-3 text-center">
				<div class="rounded-circle bg-primary-subtle text-primary fw-bold mx-auto mb-3 d-flex align-items-center justify-content-center" style="width: 3rem; height: 3rem;">
					{idx + 1}
				</div>
				<h3 class="h6">{*title}</h3>
				<p class="small text-secondary">{*text}</p>
			</div>
		}
	});
	html! {<>
		<section class="py-5 text-center">
			<div class="container">
				<i class="bi bi-box-arrow-in-down display-4 text-primary" />
				<h1 class="display-5 fw-bold mt-3">{"WooCommerce Product Import Genie"}</h1>
				<p class="lead text-secondary mx-auto" style="max-width: 40rem;">
					{"Import and manage your WooCommerce products from a CSV file."}
				</p>
				<div class="d-flex justify-content-center gap-3 mt-4">
					<Link<Route> classes="btn btn-primary btn-lg" to={Route::Register}>
						{"Get Started"}<i class="bi bi-arrow-right ms-2" />
					</Link<Route>>
					<Link<Route> classes="btn btn-outline-secondary btn-lg" to={Route::Login}>{"Sign In"}</Link<Route>>
				</div>
			</div>
		</section>
		<section class="py-5 bg-body-tertiary">
			<div class="container">
				<h2 class="text-center mb-4">{"Features"}</h2>
				<div class="row g-4">{for features}</div>
			</div>
		</section>
		<section class="py-5">
			<div class="container">
				<h2 class="text-center mb-4">{"How It Works"}</h2>
				<div class="row g-4">{for steps}</div>
			</div>
		</section>
	</>}
}
