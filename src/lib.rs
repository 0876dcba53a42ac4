use route::Access;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod auth;
pub mod components;
pub mod config;
pub mod csv;
pub mod database;
pub mod hooks;
pub mod import;
pub mod logging;
pub mod mapping;
pub mod page;
pub mod route;
pub mod session;
pub mod simulation;
pub mod storage;
pub mod util;
pub mod woo;

#[function_component]
pub fn App() -> Html {
	let database = use_memo((), |_| database::Database::new(Rc::new(storage::LocalStore)));
	let simulation = use_memo((), |_| {
		let config = config::Config::load(&storage::LocalStore);
		log::debug!(target: "config", "{config:?}");
		simulation::Simulation::browser(config)
	});
	html! {
		<BrowserRouter>
			<database::Provider database={(*database).clone()}>
				<ContextProvider<simulation::Simulation> context={(*simulation).clone()}>
					<div class="d-flex flex-column min-vh-100">
						<components::Header />
						<main class="flex-grow-1">
							{ <Route as route::Route>::switch() }
						</main>
						<components::Footer />
					</div>
				</ContextProvider<simulation::Simulation>>
			</database::Provider>
		</BrowserRouter>
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[at("/dashboard")]
	Dashboard,
	#[at("/import")]
	Import,
	#[at("/mapping")]
	Mapping,
	#[at("/products")]
	Products,
	#[at("/settings")]
	Settings,
	#[not_found]
	#[at("/404")]
	NotFound,
}
impl route::Route for Route {
	fn access(&self) -> Access {
		match self {
			Self::Home | Self::Login | Self::Register | Self::NotFound => Access::Public,
			Self::Dashboard | Self::Settings => Access::SignedIn,
			Self::Import | Self::Products => Access::Connected,
			Self::Mapping => Access::Uploaded,
		}
	}

	fn html(self) -> Html {
		match self {
			Self::Home => html!(<page::Index />),
			Self::Login => html!(<page::Login />),
			Self::Register => html!(<page::Register />),
			Self::Dashboard => html!(<page::Dashboard />),
			Self::Import => html!(<page::Import />),
			Self::Mapping => html!(<page::Mapping />),
			Self::Products => html!(<page::Products />),
			Self::Settings => html!(<page::Settings />),
			Self::NotFound => html!(<page::NotFound />),
		}
	}
}
