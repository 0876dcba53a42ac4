use crate::{
	csv::{self, Grid, UploadError},
	util::web_ext::{dropped_file, InputExt},
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FileUploadProps {
	pub max_bytes: u64,
	pub on_processed: Callback<(String, Grid)>,
}

/// Picks a CSV file by drag and drop or by browsing, then parses it on request.
#[function_component]
pub fn FileUpload(FileUploadProps { max_bytes, on_processed }: &FileUploadProps) -> Html {
	let dragging = use_state_eq(|| false);
	let file = use_state(|| None::<web_sys::File>);
	let processing = use_state_eq(|| false);
	let error = use_state_eq(|| None::<String>);

	let select = Callback::from({
		let file = file.clone();
		let error = error.clone();
		let max_bytes = *max_bytes;
		move |selected: Option<web_sys::File>| {
			let Some(selected) = selected else {
				return;
			};
			let checked = csv::check_file(&selected.name(), &selected.type_(), selected.size() as u64, max_bytes);
			match checked {
				Ok(()) => {
					error.set(None);
					file.set(Some(selected));
				}
				Err(err) => {
					log::warn!(target: "upload", "rejected {:?}: {err}", selected.name());
					error.set(Some(err.to_string()));
				}
			}
		}
	});
	let ondragover = Callback::from({
		let dragging = dragging.clone();
		move |evt: DragEvent| {
			evt.prevent_default();
			dragging.set(true);
		}
	});
	let ondragleave = Callback::from({
		let dragging = dragging.clone();
		move |evt: DragEvent| {
			evt.prevent_default();
			dragging.set(false);
		}
	});
	let ondrop = Callback::from({
		let dragging = dragging.clone();
		let select = select.clone();
		move |evt: DragEvent| {
			evt.prevent_default();
			dragging.set(false);
			select.emit(dropped_file(&evt));
		}
	});
	let onchange = select.reform(|evt: Event| evt.input_file());
	let remove = Callback::from({
		let file = file.clone();
		let error = error.clone();
		move |_: MouseEvent| {
			file.set(None);
			error.set(None);
		}
	});
	let process = Callback::from({
		let file = file.clone();
		let processing = processing.clone();
		let error = error.clone();
		let on_processed = on_processed.clone();
		move |_: MouseEvent| {
			let Some(selected) = (*file).clone() else {
				return;
			};
			let processing = processing.clone();
			let error = error.clone();
			let on_processed = on_processed.clone();
			processing.set(true);
			error.set(None);
			crate::util::spawn_local("upload", async move {
				let result = csv::read_file(&selected).await;
				processing.set(false);
				let grid = result.map_err(|err: UploadError| {
					error.set(Some(err.to_string()));
					err
				})?;
				on_processed.emit((selected.name(), grid));
				Ok(()) as Result<(), UploadError>
			});
		}
	});

	let body = match &*file {
		None => {
			let zone = match *dragging {
				true => "border-primary bg-primary-subtle",
				false => "border-secondary-subtle",
			};
			html! {
				<div class={classes!("upload-zone", "border", "border-2", "rounded", "p-5", "text-center", zone)}
					{ondragover} {ondragleave} {ondrop}
				>
					<i class="bi bi-cloud-arrow-up fs-1 text-primary" />
					<p class="fw-medium mt-3 mb-1">{"Drag and drop your CSV file, or click to browse"}</p>
					<p class="small text-secondary">{format!("Supports CSV files up to {}MB", max_bytes / (1024 * 1024))}</p>
					<label class="btn btn-outline-primary btn-sm">
						{"Select File"}
						<input type="file" class="d-none" accept=".csv,text/csv" {onchange} />
					</label>
				</div>
			}
		}
		Some(selected) => html! {
			<div class="border rounded p-3 d-flex align-items-center">
				<i class="bi bi-filetype-csv fs-3 text-primary me-3" />
				<div class="me-auto">
					<div class="fw-medium text-truncate">{selected.name()}</div>
					<div class="small text-secondary">{format!("{:.1} KB", selected.size() / 1024.0)}</div>
				</div>
				<button class="btn btn-link text-secondary" onclick={remove}>
					<i class="bi bi-x-lg" />
				</button>
			</div>
		},
	};

	html! {
		<div class="card">
			<div class="card-header d-flex align-items-center">
				<i class="bi bi-file-earmark-text me-2 text-primary" />
				{"Upload CSV File"}
			</div>
			<div class="card-body">
				{body}
				{match &*error {
					Some(error) => html!(<div class="text-danger small mt-3"><i class="bi bi-exclamation-circle me-1" />{error}</div>),
					None => html!(),
				}}
			</div>
			{match file.is_some() {
				true => html! {
					<div class="card-footer d-flex justify-content-end">
						<button class="btn btn-primary" onclick={process} disabled={*processing}>
							{match *processing {
								true => html!("Processing..."),
								false => html!(<><i class="bi bi-check-lg me-1" />{"Process File"}</>),
							}}
						</button>
					</div>
				},
				false => html!(),
			}}
		</div>
	}
}
