use crate::{
	csv::Grid,
	mapping::{self, ColumnMapping, Field, MappedRecord},
	util::web_ext::InputExt,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MappingTableProps {
	pub grid: Rc<Grid>,
	pub on_complete: Callback<Vec<MappedRecord>>,
}

/// Column selectors for every product field, plus a preview of the first rows.
#[function_component]
pub fn MappingTable(MappingTableProps { grid, on_complete }: &MappingTableProps) -> Html {
	let headers = grid.first().cloned().unwrap_or_default();
	let mapping = use_state_eq({
		let headers = headers.clone();
		move || ColumnMapping::suggest(&headers)
	});
	let error = use_state_eq(|| None::<String>);

	let reset = Callback::from({
		let mapping = mapping.clone();
		let error = error.clone();
		let headers = headers.clone();
		move |_: MouseEvent| {
			mapping.set(ColumnMapping::suggest(&headers));
			error.set(None);
		}
	});
	let complete = Callback::from({
		let mapping = mapping.clone();
		let error = error.clone();
		let grid = grid.clone();
		let on_complete = on_complete.clone();
		move |_: MouseEvent| match mapping.apply(&grid) {
			Ok(records) => {
				error.set(None);
				on_complete.emit(records);
			}
			Err(err) => error.set(Some(err.to_string())),
		}
	});

	let selectors = Field::all().into_iter().map(|field| {
		let onchange = Callback::from({
			let mapping = mapping.clone();
			let error = error.clone();
			move |evt: Event| {
				let mut next = (*mapping).clone();
				match evt.select_value().and_then(|value| value.parse::<usize>().ok()) {
					Some(column) => next.assign(field, column),
					None => next.clear(field),
				}
				mapping.set(next);
				error.set(None);
			}
		});
		let selected = mapping.column(field);
		let id = format!("field-{}", field.key());
		let options = headers.iter().enumerate().map(|(column, header)| {
			html!(<option value={column.to_string()} selected={selected == Some(column)}>{header}</option>)
		});
		html! {
			<div class="col-md-6 col-lg-4">
				<label class="form-label small fw-medium" for={id.clone()}>
					{field.label()}
					if field.is_required() {
						<span class="text-danger ms-1">{"*"}</span>
					}
				</label>
				<select class="form-select" {id} {onchange}>
					<option value="" selected={selected.is_none()}>{"Ignore this field"}</option>
					{for options}
				</select>
			</div>
		}
	});

	let header_cells = headers.iter().enumerate().map(|(column, header)| {
		html! {
			<th class="text-nowrap">
				<div>{header}</div>
				{match mapping.field_for(column) {
					Some(field) => html!(<div class="small text-primary"><i class="bi bi-arrow-right me-1" />{field.label()}</div>),
					None => html!(),
				}}
			</th>
		}
	});
	let preview = mapping::preview(grid, mapping::PREVIEW_ROWS);
	let rows = preview.iter().map(|row| {
		html!(<tr>{for row.iter().map(|cell| html!(<td class="text-nowrap">{cell}</td>))}</tr>)
	});

	html! {
		<div class="d-flex flex-column gap-4">
			<div class="card">
				<div class="card-header">
					<i class="bi bi-list-ul me-2 text-primary" />
					{"Map CSV Columns to Product Fields"}
				</div>
				<div class="card-body">
					<p class="small text-secondary">
						{"Select which CSV column corresponds to each product field. "}
						<span class="text-primary fw-medium">{"Product Name and Price are required."}</span>
					</p>
					<div class="row g-3">{for selectors}</div>
					if let Some(error) = &*error {
						<div class="text-danger small mt-3"><i class="bi bi-exclamation-circle me-1" />{error}</div>
					}
				</div>
				<div class="card-footer d-flex justify-content-between">
					<button class="btn btn-outline-secondary" onclick={reset}>{"Reset Mapping"}</button>
					<button class="btn btn-primary" onclick={complete}>
						<i class="bi bi-save me-2" />{"Complete Mapping"}
					</button>
				</div>
			</div>
			<div class="card">
				<div class="card-header">{"Data Preview"}</div>
				<div class="card-body table-responsive">
					<table class="table table-sm">
						<thead><tr>{for header_cells}</tr></thead>
						<tbody>{for rows}</tbody>
					</table>
					if preview.is_empty() {
						<p class="text-center text-secondary py-3">{"No preview data available"}</p>
					}
				</div>
			</div>
		</div>
	}
}
