use super::PageTitle;
use crate::{
	database::ImportLog,
	hooks::{use_database, use_settings},
	import::ImportState,
	session::Session,
	Route,
};
use time::OffsetDateTime;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

fn format_date(date: &OffsetDateTime) -> String {
	format!("{} {:02}:{:02} UTC", date.date(), date.hour(), date.minute())
}

fn status_badge(state: ImportState) -> Html {
	let (class, label) = match state {
		ImportState::Pending => ("text-bg-secondary", "Pending"),
		ImportState::Processing => ("text-bg-primary", "Processing"),
		ImportState::Completed => ("text-bg-success", "Completed"),
		ImportState::Failed => ("text-bg-danger", "Failed"),
	};
	html!(<span class={classes!("badge", class)}>{label}</span>)
}

#[function_component]
pub fn Dashboard() -> Html {
	let session = use_store_value::<Session>();
	let database = use_database();
	let settings = use_settings();
	let username = session.user.as_ref().map(|user| user.username.clone()).unwrap_or_else(|| "User".into());
	let logs = match &session.user {
		Some(user) => database.import_logs_for_user(&user.id).unwrap_or_else(|err| {
			log::error!(target: "database", "failed to read import history: {err}");
			Vec::new()
		}),
		None => Vec::new(),
	};

	html! {
		<div class="container py-5">
			<PageTitle icon="bi-speedometer2" title="Dashboard" subtitle={format!("Welcome back, {username}")} />
			if settings.is_none() {
				<div class="alert alert-warning">
					<div class="fw-medium"><i class="bi bi-exclamation-triangle me-2" />{"Setup Required"}</div>
					<p class="small my-2">{"You need to configure your WooCommerce API credentials before importing products."}</p>
					<Link<Route> classes="btn btn-outline-warning btn-sm" to={Route::Settings}>
						<i class="bi bi-gear me-1" />{"Configure Settings"}
					</Link<Route>>
				</div>
			}
			<div class="row g-4 mb-4">
				<QuickLink title="Quick Import" text="Start a new product import" to={Route::Import} icon="bi-upload" />
				<QuickLink title="Products" text="Browse and sync your store's products" to={Route::Products} icon="bi-box-seam" />
				<QuickLink title="Settings" text="Configure your API credentials" to={Route::Settings} icon="bi-gear" />
			</div>
			<ImportHistory {logs} />
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct QuickLinkProps {
	title: &'static str,
	text: &'static str,
	icon: &'static str,
	to: Route,
}

#[function_component]
fn QuickLink(QuickLinkProps { title, text, icon, to }: &QuickLinkProps) -> Html {
	html! {
		<div class="col-md-4">
			<div class="card h-100">
				<div class="card-body">
					<h2 class="h5">{*title}</h2>
					<p class="small text-secondary">{*text}</p>
					<Link<Route> classes="btn btn-outline-primary w-100" to={*to}>
						<i class={classes!("bi", *icon, "me-2")} />{*title}
					</Link<Route>>
				</div>
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ImportHistoryProps {
	logs: Vec<ImportLog>,
}

#[function_component]
fn ImportHistory(ImportHistoryProps { logs }: &ImportHistoryProps) -> Html {
	let rows = logs.iter().map(|entry| {
		html! {
			<tr>
				<td>{format_date(&entry.import_date)}</td>
				<td>{entry.total_products}</td>
				<td class="text-success">{entry.successful_imports}</td>
				<td class="text-danger">{entry.failed_imports}</td>
				<td>{status_badge(entry.status)}</td>
			</tr>
		}
	});
	html! {
		<div class="card">
			<div class="card-header">{"Recent Activity"}</div>
			<div class="card-body">
				if logs.is_empty() {
					<p class="text-center text-secondary py-4 mb-0">{"No recent import activity found"}</p>
				} else {
					<table class="table table-sm mb-0">
						<thead>
							<tr>
								<th>{"Date"}</th>
								<th>{"Products"}</th>
								<th>{"Successful"}</th>
								<th>{"Failed"}</th>
								<th>{"Status"}</th>
							</tr>
						</thead>
						<tbody>{for rows}</tbody>
					</table>
				}
			</div>
		</div>
	}
}
