use crate::{
	auth::{Auth, AuthError},
	hooks::{use_database, use_simulation},
	session::Session,
	util::web_ext::InputExt,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::{Link, Redirect};
use yewdux::prelude::{use_store, Dispatch};

#[derive(Clone, PartialEq, Properties)]
struct TextInputProps {
	id: &'static str,
	label: &'static str,
	#[prop_or("text")]
	kind: &'static str,
	#[prop_or_default]
	placeholder: &'static str,
	value: AttrValue,
	on_change: Callback<String>,
}

#[function_component]
fn TextInput(props: &TextInputProps) -> Html {
	let oninput = Callback::from({
		let on_change = props.on_change.clone();
		move |evt: InputEvent| {
			if let Some(value) = evt.input_value() {
				on_change.emit(value);
			}
		}
	});
	html! {
		<div class="mb-3">
			<label class="form-label" for={props.id}>{props.label}</label>
			<input
				class="form-control" id={props.id} type={props.kind}
				placeholder={props.placeholder} value={props.value.clone()}
				{oninput} required=true
			/>
		</div>
	}
}

fn field_callback(handle: &UseStateHandle<String>) -> Callback<String> {
	let handle = handle.clone();
	Callback::from(move |value: String| handle.set(value))
}

#[derive(Clone, PartialEq, Properties)]
struct AccountCardProps {
	title: &'static str,
	subtitle: &'static str,
	error: Option<AttrValue>,
	submitting: bool,
	submit_label: &'static str,
	on_submit: Callback<()>,
	children: Html,
	footer: Html,
}

#[function_component]
fn AccountCard(props: &AccountCardProps) -> Html {
	let onsubmit = props.on_submit.reform(|evt: SubmitEvent| evt.prevent_default());
	html! {
		<div class="container py-5" style="max-width: 28rem;">
			<div class="card">
				<form {onsubmit}>
					<div class="card-body">
						<div class="text-center mb-3">
							<i class="bi bi-upload fs-1 text-primary" />
							<h1 class="h4 mt-2">{props.title}</h1>
							<p class="text-secondary small">{props.subtitle}</p>
						</div>
						{props.children.clone()}
						if let Some(error) = &props.error {
							<div class="alert alert-danger py-2 small">{error}</div>
						}
						<button type="submit" class="btn btn-primary w-100" disabled={props.submitting}>
							if props.submitting {
								<span class="spinner-border spinner-border-sm me-2" />
							}
							{props.submit_label}
						</button>
					</div>
					<div class="card-footer text-center small text-secondary">{props.footer.clone()}</div>
				</form>
			</div>
		</div>
	}
}

/// Runs an account operation and, on success, stores the session and moves to the dashboard.
fn submit_handler<F, Fut>(
	dispatch: &Dispatch<Session>,
	submitting: &UseStateHandle<bool>,
	error: &UseStateHandle<Option<AttrValue>>,
	operation: F,
) -> Callback<()>
where
	F: Fn() -> Fut + 'static,
	Fut: std::future::Future<Output = Result<Session, AuthError>> + 'static,
{
	let dispatch = dispatch.clone();
	let submitting = submitting.clone();
	let error = error.clone();
	Callback::from(move |_| {
		let submitting = submitting.clone();
		let error = error.clone();
		let dispatch = dispatch.clone();
		let future = operation();
		submitting.set(true);
		error.set(None);
		crate::util::spawn_local("auth", async move {
			let result = future.await;
			submitting.set(false);
			match result {
				Ok(session) => {
					dispatch.set(session);
					Ok(())
				}
				Err(err) => {
					error.set(Some(err.to_string().into()));
					Err(err)
				}
			}
		});
	})
}

#[function_component]
pub fn Login() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let database = use_database();
	let simulation = use_simulation();
	let username = use_state(String::new);
	let password = use_state(String::new);
	let submitting = use_state_eq(|| false);
	let error = use_state_eq(|| None::<AttrValue>);

	let on_submit = submit_handler(&dispatch, &submitting, &error, {
		let (username, password) = (username.clone(), password.clone());
		move || {
			let (database, simulation) = (database.clone(), simulation.clone());
			let (username, password) = ((*username).clone(), (*password).clone());
			async move { Auth::new(&database, &simulation).login(&username, &password).await }
		}
	});

	if session.is_authenticated() {
		return html!(<Redirect<Route> to={Route::Dashboard} />);
	}

	html! {
		<AccountCard
			title="Sign In" subtitle="Enter your credentials to access your account"
			error={(*error).clone()} submitting={*submitting}
			submit_label={if *submitting { "Signing in..." } else { "Sign In" }}
			{on_submit}
			footer={html! {<>
				{"Don't have an account? "}
				<Link<Route> to={Route::Register}>{"Sign Up"}</Link<Route>>
			</>}}
		>
			<TextInput id="username" label="Username" placeholder="Enter your username"
				value={(*username).clone()} on_change={field_callback(&username)} />
			<TextInput id="password" label="Password" kind="password" placeholder="Enter your password"
				value={(*password).clone()} on_change={field_callback(&password)} />
		</AccountCard>
	}
}

#[function_component]
pub fn Register() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let database = use_database();
	let simulation = use_simulation();
	let username = use_state(String::new);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let submitting = use_state_eq(|| false);
	let error = use_state_eq(|| None::<AttrValue>);

	let on_submit = submit_handler(&dispatch, &submitting, &error, {
		let (username, email, password) = (username.clone(), email.clone(), password.clone());
		move || {
			let (database, simulation) = (database.clone(), simulation.clone());
			let (username, email, password) = ((*username).clone(), (*email).clone(), (*password).clone());
			async move { Auth::new(&database, &simulation).register(&username, &email, &password).await }
		}
	});

	if session.is_authenticated() {
		return html!(<Redirect<Route> to={Route::Dashboard} />);
	}

	html! {
		<AccountCard
			title="Create an Account" subtitle="Enter your details to get started"
			error={(*error).clone()} submitting={*submitting}
			submit_label={if *submitting { "Creating account..." } else { "Sign Up" }}
			{on_submit}
			footer={html! {<>
				{"Already have an account? "}
				<Link<Route> to={Route::Login}>{"Sign In"}</Link<Route>>
			</>}}
		>
			<TextInput id="username" label="Username" placeholder="Choose a username"
				value={(*username).clone()} on_change={field_callback(&username)} />
			<TextInput id="email" label="Email" kind="email" placeholder="you@example.com"
				value={(*email).clone()} on_change={field_callback(&email)} />
			<TextInput id="password" label="Password" kind="password" placeholder="Choose a password"
				value={(*password).clone()} on_change={field_callback(&password)} />
		</AccountCard>
	}
}
