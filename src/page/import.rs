use super::PageTitle;
use crate::{components::FileUpload, csv::Upload, hooks::use_simulation, mapping::Field, Route};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::use_store;

#[function_component]
pub fn Import() -> Html {
	let (_, dispatch) = use_store::<Upload>();
	let simulation = use_simulation();
	let navigator = use_navigator();
	let on_processed = Callback::from(move |(file_name, grid)| {
		log::info!(target: "upload", "{file_name:?} ready for mapping");
		dispatch.set(Upload::new(file_name, grid));
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Mapping);
		}
	});
	let (required, recommended): (Vec<_>, Vec<_>) = Field::all().into_iter().partition(Field::is_required);
	let list = |fields: Vec<Field>| html!(<ul class="small text-secondary">{for fields.into_iter().map(|field| html!(<li>{field.label()}</li>))}</ul>);

	html! {
		<div class="container py-5" style="max-width: 56rem;">
			<PageTitle icon="bi-upload" title="Import Products" subtitle="Upload your CSV file to begin the import process">
				<Link<Route> classes="btn btn-outline-secondary" to={Route::Dashboard}>
					<i class="bi bi-arrow-left me-2" />{"Back to Dashboard"}
				</Link<Route>>
			</PageTitle>
			<FileUpload max_bytes={simulation.config.max_upload_bytes} {on_processed} />
			<div class="card mt-4">
				<div class="card-header"><i class="bi bi-database me-2 text-primary" />{"CSV Format Guidelines"}</div>
				<div class="card-body">
					<h3 class="h6">{"Required Columns"}</h3>
					{list(required)}
					<h3 class="h6">{"Recommended Columns"}</h3>
					{list(recommended)}
					<h3 class="h6">{"CSV Formatting Tips"}</h3>
					<ul class="small text-secondary mb-0">
						<li>{"Include column headers in the first row"}</li>
						<li>{"Separate cells with commas; quoted cells are not supported"}</li>
						<li>{"Headers containing a field's name (\"Product Name\", \"Sale Price\") are mapped automatically"}</li>
					</ul>
				</div>
			</div>
		</div>
	}
}
