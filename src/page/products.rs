use super::PageTitle;
use crate::{
	components::Pagination,
	hooks::{use_simulation, use_woo_client},
	woo::{sync_summary, total_pages, Product, ProductPage, StockStatus, SyncStatus},
};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_async;

/// The products on the current page, as last fetched or synced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
	pub products: Vec<Product>,
	pub total: usize,
}

pub enum CatalogAction {
	Loaded(ProductPage),
	Syncing(u64),
	Replace(Product),
	/// Batch results; only products still on the current page are updated.
	ReplaceAll(Vec<Product>),
}

impl Catalog {
	fn replace(&mut self, updated: Product) {
		for product in self.products.iter_mut().filter(|product| product.id == updated.id) {
			*product = updated.clone();
		}
	}
}

impl Reducible for Catalog {
	type Action = CatalogAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut catalog = (*self).clone();
		match action {
			CatalogAction::Loaded(ProductPage { products, total }) => {
				catalog.products = products;
				catalog.total = total;
			}
			CatalogAction::Syncing(id) => {
				for product in catalog.products.iter_mut().filter(|product| product.id == id) {
					product.sync_status = SyncStatus::Syncing;
				}
			}
			CatalogAction::Replace(updated) => catalog.replace(updated),
			CatalogAction::ReplaceAll(products) => {
				for updated in products {
					catalog.replace(updated);
				}
			}
		}
		Rc::new(catalog)
	}
}

/// "Showing 11-20 of 45 products".
fn showing(page: usize, per_page: usize, total: usize) -> String {
	if total == 0 {
		return "No products found".into();
	}
	let first = (page - 1) * per_page + 1;
	let last = (page * per_page).min(total);
	format!("Showing {first}-{last} of {total} products")
}

fn stock_cell(product: &Product) -> Html {
	let (class, icon) = match product.stock_status {
		StockStatus::InStock => ("text-success", "bi-check-lg"),
		StockStatus::OutOfStock => ("text-danger", "bi-slash-circle"),
		StockStatus::OnBackorder => ("text-warning", "bi-clock"),
	};
	html! {<>
		<span class={class}><i class={classes!("bi", icon, "me-1")} />{product.stock_status.label()}</span>
		if let Some(quantity) = product.stock_quantity {
			<div class="small text-secondary">{format!("Qty: {quantity}")}</div>
		}
	</>}
}

fn sync_cell(product: &Product) -> Html {
	let (class, icon) = match product.sync_status {
		SyncStatus::Synced => ("text-success", "bi-check-lg"),
		SyncStatus::NotSynced => ("text-secondary", "bi-arrow-repeat"),
		SyncStatus::Syncing => ("text-primary", "bi-hourglass-split"),
		SyncStatus::Error => ("text-danger", "bi-exclamation-triangle"),
	};
	html! {
		<span class={class} title={product.sync_error.clone().unwrap_or_default()}>
			<i class={classes!("bi", icon, "me-1")} />{product.sync_status.label()}
		</span>
	}
}

#[function_component]
pub fn Products() -> Html {
	let simulation = use_simulation();
	let client = use_woo_client();
	let per_page = simulation.config.products_per_page;
	let page = use_state_eq(|| 1usize);
	let reload = use_state(|| 0u32);
	let progress = use_state_eq(|| None::<(usize, usize)>);
	let notice = use_state_eq(|| None::<(&'static str, String)>);
	let catalog = use_reducer(Catalog::default);

	let fetch = use_async({
		let client = client.clone();
		let dispatcher = catalog.dispatcher();
		let page = *page;
		async move {
			let Some(client) = client else {
				return Err("no WooCommerce credentials saved".to_owned());
			};
			dispatcher.dispatch(CatalogAction::Loaded(client.fetch_products(page, per_page).await));
			Ok(())
		}
	});
	use_effect_with((*page, *reload), {
		let fetch = fetch.clone();
		move |_| fetch.run()
	});
	let loading = fetch.loading || (fetch.data.is_none() && fetch.error.is_none());

	let Some(client) = client else {
		return html!();
	};

	let refresh = Callback::from({
		let reload = reload.clone();
		move |_: MouseEvent| reload.set(*reload + 1)
	});
	let sync_all = Callback::from({
		let client = client.clone();
		let catalog = catalog.clone();
		let progress = progress.clone();
		let notice = notice.clone();
		move |_: MouseEvent| {
			let client = client.clone();
			let dispatcher = catalog.dispatcher();
			let products = catalog.products.clone();
			let progress = progress.clone();
			let notice = notice.clone();
			progress.set(Some((0, products.len())));
			notice.set(None);
			wasm_bindgen_futures::spawn_local(async move {
				let synced = client
					.sync_all(products, |done, total| progress.set(Some((done, total))))
					.await;
				let message = match sync_summary(&synced) {
					(synced, 0) => ("alert-success", format!("All {synced} products synced successfully")),
					(synced, errors) => ("alert-warning", format!("Sync completed with {synced} successes and {errors} failures")),
				};
				dispatcher.dispatch(CatalogAction::ReplaceAll(synced));
				progress.set(None);
				notice.set(Some(message));
			});
		}
	});
	let sync_one = Callback::from({
		let client = client.clone();
		let dispatcher = catalog.dispatcher();
		let notice = notice.clone();
		move |product: Product| {
			let client = client.clone();
			let dispatcher = dispatcher.clone();
			let notice = notice.clone();
			dispatcher.dispatch(CatalogAction::Syncing(product.id));
			wasm_bindgen_futures::spawn_local(async move {
				let synced = client.sync_product_or_mark(&product).await;
				let message = match (&synced.sync_status, &synced.sync_error) {
					(SyncStatus::Synced, _) => ("alert-success", format!("Product \"{}\" synced successfully", synced.name)),
					(_, error) => (
						"alert-danger",
						format!("Failed to sync product \"{}\": {}", synced.name, error.as_deref().unwrap_or("unknown error")),
					),
				};
				dispatcher.dispatch(CatalogAction::Replace(synced));
				notice.set(Some(message));
			});
		}
	});
	let select_page = Callback::from({
		let page = page.clone();
		move |next: usize| page.set(next)
	});

	let busy = progress.is_some();
	let rows = catalog.products.iter().map(|product| {
		let onclick = sync_one.reform({
			let product = product.clone();
			move |_: MouseEvent| product.clone()
		});
		let disabled = busy || product.sync_status == SyncStatus::Syncing;
		html! {
			<tr>
				<td class="fw-medium">
					if let Some(image) = product.images.first() {
						<img src={image.clone()} alt={product.name.clone()} class="rounded me-2" width="40" height="40" />
					}
					{&product.name}
				</td>
				<td>{&product.sku}</td>
				<td>
					{&product.price}
					if product.is_on_sale() {
						<div class="small text-secondary text-decoration-line-through">{&product.regular_price}</div>
					}
				</td>
				<td>{stock_cell(product)}</td>
				<td><span class="badge text-bg-light">{product.status.label()}</span></td>
				<td>{sync_cell(product)}</td>
				<td class="text-end">
					<button class="btn btn-outline-primary btn-sm" {onclick} {disabled}>
						<i class="bi bi-arrow-repeat me-1" />{"Sync"}
					</button>
				</td>
			</tr>
		}
	});

	html! {
		<div class="container py-5">
			<PageTitle icon="bi-box-seam" title="Products" subtitle="Manage and sync your WooCommerce products" />
			if let Some((class, message)) = &*notice {
				<div class={classes!("alert", *class)}>{message}</div>
			}
			<div class="card">
				<div class="card-header d-flex align-items-center justify-content-between">
					<div>
						<div class="fw-medium">{"Product Inventory"}</div>
						<div class="small text-secondary">{showing(*page, per_page, catalog.total)}</div>
					</div>
					<div class="d-flex gap-2">
						<button class="btn btn-outline-secondary btn-sm" onclick={refresh} disabled={loading}>
							<i class="bi bi-arrow-clockwise me-1" />{"Refresh"}
						</button>
						<button class="btn btn-primary btn-sm" onclick={sync_all} disabled={busy || catalog.products.is_empty()}>
							<i class="bi bi-arrow-repeat me-1" />{"Sync All"}
						</button>
					</div>
				</div>
				<div class="card-body">
					if let Some((done, total)) = *progress {
						<SyncProgress {done} {total} />
					}
					if loading {
						<div class="text-center py-5"><span class="spinner-border text-primary" /></div>
					} else if catalog.products.is_empty() {
						<div class="text-center text-secondary py-5">
							<i class="bi bi-box-seam fs-1 opacity-25" />
							<p class="mt-3 mb-0">{"No products found"}</p>
						</div>
					} else {
						<div class="table-responsive">
							<table class="table align-middle">
								<thead>
									<tr>
										<th>{"Product"}</th>
										<th>{"SKU"}</th>
										<th>{"Price"}</th>
										<th>{"Stock"}</th>
										<th>{"Status"}</th>
										<th>{"Sync Status"}</th>
										<th class="text-end">{"Actions"}</th>
									</tr>
								</thead>
								<tbody>{for rows}</tbody>
							</table>
						</div>
					}
				</div>
				<div class="card-footer">
					<Pagination current={*page} total_pages={total_pages(catalog.total, per_page)} on_select={select_page} disabled={busy || loading} />
				</div>
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct SyncProgressProps {
	done: usize,
	total: usize,
}

#[function_component]
fn SyncProgress(SyncProgressProps { done, total }: &SyncProgressProps) -> Html {
	let percent = match *total {
		0 => 0,
		total => (*done as f64 / total as f64 * 100.0).round() as u32,
	};
	html! {
		<div class="alert alert-primary">
			<div class="d-flex justify-content-between">
				<span><span class="spinner-border spinner-border-sm me-2" />{format!("Syncing products... ({done} of {total})")}</span>
				<span>{format!("{percent}%")}</span>
			</div>
			<div class="progress mt-2" style="height: 0.5rem;">
				<div class="progress-bar" style={format!("width: {percent}%")} />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::OffsetDateTime;

	fn page(range: std::ops::Range<usize>) -> ProductPage {
		ProductPage {
			products: range.map(|idx| Product::synthetic(idx, OffsetDateTime::UNIX_EPOCH)).collect(),
			total: 45,
		}
	}

	#[test]
	fn catalog_tracks_individual_syncs() {
		let catalog = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(page(0..3)));
		assert_eq!(catalog.total, 45);
		let id = catalog.products[1].id;
		let catalog = catalog.reduce(CatalogAction::Syncing(id));
		assert_eq!(catalog.products[1].sync_status, SyncStatus::Syncing);
		assert_ne!(catalog.products[0].sync_status, SyncStatus::Syncing);

		let mut synced = catalog.products[1].clone();
		synced.sync_status = SyncStatus::Synced;
		let catalog = catalog.reduce(CatalogAction::Replace(synced.clone()));
		assert_eq!(catalog.products[1], synced);
		assert_eq!(catalog.products.len(), 3);
	}

	#[test]
	fn catalog_takes_batch_results() {
		let catalog = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(page(0..2)));
		let mut products = catalog.products.clone();
		products.iter_mut().for_each(|product| product.sync_status = SyncStatus::Error);
		let catalog = catalog.reduce(CatalogAction::ReplaceAll(products));
		assert!(catalog.products.iter().all(|product| product.sync_status == SyncStatus::Error));
	}

	#[test]
	fn batch_results_leave_a_newer_page_alone() {
		let first = Rc::new(Catalog::default()).reduce(CatalogAction::Loaded(page(0..10)));
		let mut synced = first.products.clone();
		synced.iter_mut().for_each(|product| product.sync_status = SyncStatus::Synced);

		let second = first.reduce(CatalogAction::Loaded(page(10..20)));
		let expected = second.products.clone();
		let second = second.reduce(CatalogAction::ReplaceAll(synced));
		assert_eq!(second.products, expected);
		assert_eq!(second.total, 45);
	}

	#[test]
	fn showing_ranges() {
		assert_eq!(showing(1, 10, 0), "No products found");
		assert_eq!(showing(1, 10, 45), "Showing 1-10 of 45 products");
		assert_eq!(showing(5, 10, 45), "Showing 41-45 of 45 products");
	}
}
