use super::PageTitle;
use crate::{
	components::{ImportProgress, MappingTable},
	csv::Upload,
	hooks::{use_database, use_simulation},
	import::{ImportStatus, Importer},
	mapping::MappedRecord,
	session::Session,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::use_store_value;

#[function_component]
pub fn Mapping() -> Html {
	let upload = use_store_value::<Upload>();
	let session = use_store_value::<Session>();
	let database = use_database();
	let simulation = use_simulation();
	let navigator = use_navigator();
	let status = use_state(|| None::<ImportStatus>);

	let on_complete = Callback::from({
		let status = status.clone();
		move |records: Vec<MappedRecord>| {
			let Some(user) = session.user.clone() else {
				return;
			};
			let status = status.clone();
			let database = database.clone();
			let simulation = simulation.clone();
			status.set(Some(ImportStatus::new(records.len())));
			crate::util::spawn_local("import", async move {
				let importer = Importer {
					database: &database,
					simulation: &simulation,
					user_id: user.id,
				};
				let mut latest = ImportStatus::new(records.len());
				let result = importer
					.run(&records, |snapshot| {
						latest = snapshot.clone();
						status.set(Some(snapshot.clone()));
					})
					.await;
				if let Err(err) = &result {
					log::error!(target: "import", "import aborted: {err}");
					latest.fail_unexpectedly();
					status.set(Some(latest));
				}
				result.map(|_| ())
			});
		}
	});
	let on_continue = Callback::from(move |_| {
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Dashboard);
		}
	});

	let Some(grid) = upload.grid.clone() else {
		return html!();
	};
	let file_name = upload.file_name.clone().unwrap_or_default();
	match &*status {
		Some(status) => html! {
			<div class="container py-5">
				<PageTitle icon="bi-arrow-right-circle" title="Importing Products" subtitle={format!("Processing {file_name}")} />
				<ImportProgress status={status.clone()} {on_continue} />
			</div>
		},
		None => html! {
			<div class="container py-5">
				<PageTitle icon="bi-table" title="Map CSV Columns" subtitle="Match your CSV columns to WooCommerce product fields">
					<Link<Route> classes="btn btn-outline-secondary" to={Route::Import}>
						<i class="bi bi-arrow-left me-2" />{"Back to Upload"}
					</Link<Route>>
				</PageTitle>
				<MappingTable {grid} {on_complete} />
			</div>
		},
	}
}
