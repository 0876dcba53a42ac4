use super::PageTitle;
use crate::{
	database::Settings as StoredSettings,
	hooks::{use_database, use_settings, use_simulation},
	session::Session,
	util::web_ext::InputExt,
	woo::{Credentials, WooClient},
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

#[derive(Debug, Clone, PartialEq)]
enum Feedback {
	Validated,
	Rejected(String),
}

#[function_component]
pub fn Settings() -> Html {
	let session = use_store_value::<Session>();
	let database = use_database();
	let simulation = use_simulation();
	let saved = use_settings();
	let credentials = use_state({
		let saved = saved.clone();
		move || saved.map(|settings| settings.credentials).unwrap_or_default()
	});
	let validating = use_state_eq(|| false);
	let feedback = use_state_eq({
		let is_saved = saved.is_some();
		move || is_saved.then_some(Feedback::Validated)
	});

	let field = |update: fn(&mut Credentials, String)| {
		let credentials = credentials.clone();
		Callback::from(move |evt: InputEvent| {
			let Some(value) = evt.input_value() else {
				return;
			};
			let mut next = (*credentials).clone();
			update(&mut next, value);
			credentials.set(next);
		})
	};
	let on_site_url = field(|credentials, value| credentials.site_url = value);
	let on_consumer_key = field(|credentials, value| credentials.consumer_key = value);
	let on_consumer_secret = field(|credentials, value| credentials.consumer_secret = value);

	let onsubmit = Callback::from({
		let credentials = credentials.clone();
		let validating = validating.clone();
		let feedback = feedback.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			let credentials = (*credentials).clone();
			if let Err(err) = credentials.check() {
				feedback.set(Some(Feedback::Rejected(err.to_string())));
				return;
			}
			let Some(user) = session.user.clone() else {
				return;
			};
			let database = database.clone();
			let client = WooClient::new(credentials.clone(), simulation.clone());
			let validating = validating.clone();
			let feedback = feedback.clone();
			validating.set(true);
			crate::util::spawn_local("settings", async move {
				let valid = client.validate_credentials().await;
				validating.set(false);
				if !valid {
					feedback.set(Some(Feedback::Rejected(
						"Failed to validate WooCommerce credentials. Please check your details.".into(),
					)));
					return Ok(());
				}
				database.save_settings(StoredSettings {
					user_id: user.id,
					credentials,
				})?;
				log::info!(target: "settings", "saved credentials for {:?}", user.username);
				feedback.set(Some(Feedback::Validated));
				Ok(()) as anyhow::Result<()>
			});
		}
	});

	let submit_label = match (*validating, &*feedback) {
		(true, _) => html!(<><span class="spinner-border spinner-border-sm me-2" />{"Validating..."}</>),
		(false, Some(Feedback::Validated)) => html!(<><i class="bi bi-check-circle me-2" />{"Update Settings"}</>),
		(false, _) => html!("Save and Validate"),
	};

	html! {
		<div class="container py-5" style="max-width: 48rem;">
			<PageTitle icon="bi-gear" title="WooCommerce Settings" subtitle="Configure your WooCommerce API connection" />
			<div class="card mb-4">
				<form {onsubmit}>
					<div class="card-header">
						<div class="fw-medium">{"API Configuration"}</div>
						<div class="small text-secondary">{"Enter your WooCommerce REST API credentials"}</div>
					</div>
					<div class="card-body">
						<div class="mb-3">
							<label class="form-label" for="site-url"><i class="bi bi-globe me-2" />{"Site URL"}</label>
							<input class="form-control" id="site-url" placeholder="https://your-woocommerce-site.com"
								value={credentials.site_url.clone()} oninput={on_site_url} required=true />
							<div class="form-text">{"The full URL to your WooCommerce website (e.g., https://example.com)"}</div>
						</div>
						<div class="mb-3">
							<label class="form-label" for="consumer-key"><i class="bi bi-key me-2" />{"Consumer Key"}</label>
							<input class="form-control" id="consumer-key" placeholder="ck_xxxxxxxxxxxxxxxxxxxx"
								value={credentials.consumer_key.clone()} oninput={on_consumer_key} required=true />
						</div>
						<div class="mb-3">
							<label class="form-label" for="consumer-secret"><i class="bi bi-key me-2" />{"Consumer Secret"}</label>
							<input class="form-control" id="consumer-secret" type="password" placeholder="cs_xxxxxxxxxxxxxxxxxxxx"
								value={credentials.consumer_secret.clone()} oninput={on_consumer_secret} required=true />
							<div class="form-text">{"Found in WooCommerce → Settings → Advanced → REST API"}</div>
						</div>
						{match &*feedback {
							Some(Feedback::Validated) => html!(<div class="text-success small"><i class="bi bi-check-circle me-2" />{"Your WooCommerce connection is validated"}</div>),
							Some(Feedback::Rejected(message)) => html!(<div class="text-danger small"><i class="bi bi-exclamation-circle me-2" />{message}</div>),
							None => html!(),
						}}
					</div>
					<div class="card-footer d-flex justify-content-between">
						<Link<Route> classes="btn btn-outline-secondary" to={Route::Dashboard}>{"Cancel"}</Link<Route>>
						<button type="submit" class="btn btn-primary" disabled={*validating}>{submit_label}</button>
					</div>
				</form>
			</div>
			<div class="card">
				<div class="card-header">{"How to Get Your WooCommerce API Keys"}</div>
				<div class="card-body">
					<ol class="small mb-0">
						<li>{"Log in to your WordPress admin panel"}</li>
						<li>{"Navigate to WooCommerce → Settings → Advanced → REST API"}</li>
						<li>{"Click on \"Add Key\""}</li>
						<li>{"Enter a description, set permissions to \"Read/Write\" and select an admin user"}</li>
						<li>{"Click \"Generate API Key\""}</li>
						<li>{"Copy the Consumer Key and Consumer Secret into the fields above"}</li>
					</ol>
				</div>
			</div>
		</div>
	}
}
