use crate::{auth::Auth, components::AuthSwitch, database::Database, session::Session, simulation::Simulation, Route};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::use_store;

#[function_component]
pub fn Header() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let database = use_context::<Database>();
	let simulation = use_context::<Simulation>();
	let navigator = use_navigator();
	let logout = Callback::from(move |_: MouseEvent| {
		if let (Some(database), Some(simulation)) = (&database, &simulation) {
			dispatch.set(Auth::new(database, simulation).logout());
		}
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Home);
		}
	});
	let username = session.user.as_ref().map(|user| user.username.clone()).unwrap_or_default();

	html! {
		<nav class="navbar navbar-expand-md border-bottom bg-body sticky-top">
			<div class="container">
				<Link<Route> classes="navbar-brand d-flex align-items-center" to={Route::Home}>
					<i class="bi bi-box-arrow-in-down me-2" />
					{"Import Genie"}
				</Link<Route>>
				<div class="navbar-nav me-auto">
					<AuthSwitch
						identified={html! {<>
							<Link<Route> classes="nav-link" to={Route::Dashboard}>
								<i class="bi bi-speedometer2 me-1" />{"Dashboard"}
							</Link<Route>>
							<Link<Route> classes="nav-link" to={Route::Import}>
								<i class="bi bi-upload me-1" />{"Import"}
							</Link<Route>>
							<Link<Route> classes="nav-link" to={Route::Products}>
								<i class="bi bi-box-seam me-1" />{"Products"}
							</Link<Route>>
							<Link<Route> classes="nav-link" to={Route::Settings}>
								<i class="bi bi-gear me-1" />{"Settings"}
							</Link<Route>>
						</>}}
						anonymous={html! {<>
							<Link<Route> classes="nav-link" to={Route::Login}>
								<i class="bi bi-box-arrow-in-right me-1" />{"Login"}
							</Link<Route>>
							<Link<Route> classes="nav-link" to={Route::Register}>
								<i class="bi bi-person-plus me-1" />{"Register"}
							</Link<Route>>
						</>}}
					/>
				</div>
				<AuthSwitch
					identified={html! {
						<div class="d-flex align-items-center">
							<span class="text-secondary me-3">{username}</span>
							<button class="btn btn-outline-secondary btn-sm" onclick={logout}>
								<i class="bi bi-box-arrow-right me-1" />{"Logout"}
							</button>
						</div>
					}}
					anonymous={html! {
						<Link<Route> classes="btn btn-primary btn-sm" to={Route::Login}>{"Login"}</Link<Route>>
					}}
				/>
			</div>
		</nav>
	}
}

#[function_component]
pub fn Footer() -> Html {
	let year = time::OffsetDateTime::now_utc().year();
	html! {
		<footer class="border-top py-4 mt-auto">
			<div class="container d-flex flex-column flex-md-row align-items-center justify-content-between">
				<span class="fw-medium"><i class="bi bi-upload me-2" />{"Import Genie"}</span>
				<span class="text-secondary small">{format!("© {year} Import Genie. All rights reserved.")}</span>
			</div>
		</footer>
	}
}
