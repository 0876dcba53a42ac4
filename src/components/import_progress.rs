use crate::import::{ImportState, ImportStatus};
use yew::prelude::*;

static EXPORT_FILE_NAME: &str = "import-log.txt";

/// The finished report as a downloadable `data:` link.
pub fn export_href(status: &ImportStatus) -> String {
	format!("data:text/plain;charset=utf-8,{}", urlencoding::encode(&status.export_text()))
}

fn tone(status: &ImportStatus) -> (&'static str, Option<&'static str>) {
	match status.status {
		ImportState::Completed if status.failed == 0 => ("text-success", Some("bi-check-circle")),
		ImportState::Completed => ("text-warning", Some("bi-exclamation-circle")),
		ImportState::Failed => ("text-danger", Some("bi-x-circle")),
		ImportState::Pending | ImportState::Processing => ("text-primary", None),
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ImportProgressProps {
	pub status: ImportStatus,
	pub on_continue: Callback<()>,
}

#[function_component]
pub fn ImportProgress(ImportProgressProps { status, on_continue }: &ImportProgressProps) -> Html {
	let percent = status.percent();
	let (color, icon) = tone(status);
	let errors = status.errors.iter().map(|error| html!(<li class="list-group-item text-danger small">{error}</li>));
	html! {
		<div class="card">
			<div class="card-header d-flex align-items-center justify-content-between">
				<span>{"Import Progress"}</span>
				<span class={classes!("d-flex", "align-items-center", color)}>
					{icon.map(|icon| html!(<i class={classes!("bi", icon, "me-2")} />)).unwrap_or_default()}
					{status.summary()}
				</span>
			</div>
			<div class="card-body">
				<div class="d-flex justify-content-between small mb-1">
					<span>{"Progress"}</span>
					<span>{format!("{percent}%")}</span>
				</div>
				<div class="progress" role="progressbar" aria-valuenow={percent.to_string()} aria-valuemin="0" aria-valuemax="100">
					<div class="progress-bar" style={format!("width: {percent}%")} />
				</div>
				<div class="row text-center pt-3">
					<div class="col">
						<div class="small text-secondary">{"Total"}</div>
						<div class="fs-3">{status.total}</div>
					</div>
					<div class="col text-success">
						<div class="small">{"Successful"}</div>
						<div class="fs-3">{status.successful}</div>
					</div>
					<div class="col text-danger">
						<div class="small">{"Failed"}</div>
						<div class="fs-3">{status.failed}</div>
					</div>
				</div>
				if !status.errors.is_empty() {
					<div class="alert alert-danger mt-3 mb-0">
						<div class="fw-medium">{"Import Errors"}</div>
						<ul class="list-group list-group-flush mt-2 overflow-auto" style="max-height: 8rem;">
							{for errors}
						</ul>
					</div>
				}
			</div>
			if status.status.is_finished() {
				<div class="card-footer d-flex justify-content-between">
					<a class="btn btn-outline-secondary" href={export_href(status)} download={EXPORT_FILE_NAME}>
						<i class="bi bi-download me-2" />{"Export Log"}
					</a>
					<button class="btn btn-primary" onclick={on_continue.reform(|_: MouseEvent| ())}>
						{"Continue"}<i class="bi bi-arrow-right ms-2" />
					</button>
				</div>
			}
		</div>
	}
}
