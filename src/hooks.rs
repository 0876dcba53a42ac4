use crate::{
	config::Config,
	database::{Database, Settings},
	session::Session,
	simulation::Simulation,
	storage::LocalStore,
	woo::WooClient,
};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

#[hook]
pub fn use_database() -> Database {
	use_context::<Database>().unwrap_or_else(|| {
		log::warn!(target: "database", "no database provided, falling back to local storage");
		Database::new(Rc::new(LocalStore))
	})
}

#[hook]
pub fn use_simulation() -> Simulation {
	use_context::<Simulation>().unwrap_or_else(|| Simulation::browser(Config::default()))
}

/// The signed-in user's saved credentials, if both exist.
#[hook]
pub fn use_settings() -> Option<Settings> {
	let session = use_store_value::<Session>();
	let database = use_database();
	let user = session.user.as_ref()?;
	match database.settings_for_user(&user.id) {
		Ok(settings) => settings,
		Err(err) => {
			log::error!(target: "settings", "failed to read settings: {err}");
			None
		}
	}
}

/// A client for the signed-in user's store, if they have saved credentials.
#[hook]
pub fn use_woo_client() -> Option<WooClient> {
	let simulation = use_simulation();
	let settings = use_settings();
	settings.map(|settings| WooClient::new(settings.credentials, simulation))
}
