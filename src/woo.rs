//! A stand-in for the WooCommerce REST API. Every call waits out a simulated
//! round trip and then answers from synthetic data.
use crate::simulation::Simulation;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

mod pagination;
pub use pagination::*;
mod product;
pub use product::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Credentials {
	pub site_url: String,
	pub consumer_key: String,
	pub consumer_secret: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CredentialsError {
	#[error("Please fill in all fields")]
	Incomplete,
	#[error("Site URL must be an http(s) address: {0}")]
	InvalidSiteUrl(String),
}

impl Credentials {
	pub fn check(&self) -> Result<(), CredentialsError> {
		let fields = [&self.site_url, &self.consumer_key, &self.consumer_secret];
		if fields.iter().any(|field| field.trim().is_empty()) {
			return Err(CredentialsError::Incomplete);
		}
		match url::Url::parse(self.site_url.trim()) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
			Ok(url) => Err(CredentialsError::InvalidSiteUrl(format!("unsupported scheme {:?}", url.scheme()))),
			Err(err) => Err(CredentialsError::InvalidSiteUrl(err.to_string())),
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SyncError {
	#[error("Remote store rejected product {sku}")]
	Rejected { sku: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
	pub products: Vec<Product>,
	pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WooClient {
	credentials: Credentials,
	simulation: Simulation,
}
impl WooClient {
	pub fn new(credentials: Credentials, simulation: Simulation) -> Self {
		Self {
			credentials,
			simulation,
		}
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Pretends to call the store with the credentials. Anything well-formed is accepted.
	pub async fn validate_credentials(&self) -> bool {
		self.simulation.wait(self.simulation.config.latency.validate()).await;
		match self.credentials.check() {
			Ok(()) => {
				log::info!(target: "woo", "credentials accepted for {}", self.credentials.site_url);
				true
			}
			Err(err) => {
				log::warn!(target: "woo", "credentials rejected: {err}");
				false
			}
		}
	}

	/// One page (1-based) of the synthetic catalog.
	pub async fn fetch_products(&self, page: usize, per_page: usize) -> ProductPage {
		self.simulation.wait(self.simulation.config.latency.fetch()).await;
		let total = self.simulation.config.catalog_size;
		let start = page.saturating_sub(1).saturating_mul(per_page).min(total);
		let end = start.saturating_add(per_page).min(total);
		let modified = OffsetDateTime::now_utc();
		let products = (start..end).map(|idx| Product::synthetic(idx, modified)).collect::<Vec<_>>();
		log::debug!(target: "woo", "fetched page {page} ({} of {total} products)", products.len());
		ProductPage { products, total }
	}

	/// Pushes one product to the remote store.
	pub async fn sync_product(&self, product: &Product) -> Result<Product, SyncError> {
		self.simulation.wait(self.simulation.config.latency.sync()).await;
		if !self.simulation.sync_outcome.succeeds() {
			return Err(SyncError::Rejected {
				sku: product.sku.clone(),
			});
		}
		Ok(Product {
			sync_status: SyncStatus::Synced,
			sync_error: None,
			date_modified: OffsetDateTime::now_utc(),
			..product.clone()
		})
	}

	/// Like [`Self::sync_product`], but a failure comes back as the product in its error state.
	pub async fn sync_product_or_mark(&self, product: &Product) -> Product {
		match self.sync_product(product).await {
			Ok(synced) => synced,
			Err(err) => {
				log::warn!(target: "sync", "{err}");
				Product {
					sync_status: SyncStatus::Error,
					sync_error: Some(err.to_string()),
					..product.clone()
				}
			}
		}
	}

	/// Syncs every product in order. `on_progress(done, total)` is told before and
	/// after each attempt; one failure never stops the rest.
	pub async fn sync_all<F>(&self, mut products: Vec<Product>, mut on_progress: F) -> Vec<Product>
	where
		F: FnMut(usize, usize),
	{
		let total = products.len();
		for idx in 0..total {
			products[idx].sync_status = SyncStatus::Syncing;
			on_progress(idx, total);
			products[idx] = self.sync_product_or_mark(&products[idx]).await;
			on_progress(idx + 1, total);
		}
		let (synced, errors) = sync_summary(&products);
		log::info!(target: "sync", "synced {synced} of {total} products, {errors} failed");
		products
	}
}
