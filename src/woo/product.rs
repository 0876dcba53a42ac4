use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
	InStock,
	OutOfStock,
	OnBackorder,
}
impl StockStatus {
	pub fn label(&self) -> &'static str {
		match self {
			Self::InStock => "In Stock",
			Self::OutOfStock => "Out of Stock",
			Self::OnBackorder => "Backorder",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
	Publish,
	Draft,
	Pending,
}
impl PublishStatus {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Publish => "Published",
			Self::Draft => "Draft",
			Self::Pending => "Pending",
		}
	}
}

/// Whether the local copy of a product matches the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
	Synced,
	NotSynced,
	Syncing,
	Error,
}
impl SyncStatus {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Synced => "Synced",
			Self::NotSynced => "Not Synced",
			Self::Syncing => "Syncing",
			Self::Error => "Error",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: u64,
	pub name: String,
	pub sku: String,
	pub price: String,
	pub regular_price: String,
	pub sale_price: Option<String>,
	pub stock_status: StockStatus,
	pub stock_quantity: Option<u32>,
	pub categories: Vec<String>,
	pub images: Vec<String>,
	pub status: PublishStatus,
	pub sync_status: SyncStatus,
	pub sync_error: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub date_modified: OffsetDateTime,
}

static ADJECTIVES: [&str; 6] = ["Classic", "Organic", "Vintage", "Deluxe", "Compact", "Handmade"];
static NOUNS: [&str; 8] = ["T-Shirt", "Hoodie", "Mug", "Poster", "Cap", "Tote Bag", "Notebook", "Candle"];
static CATEGORIES: [&str; 4] = ["Clothing", "Accessories", "Home", "Stationery"];

impl Product {
	/// The `idx`th product of the simulated remote catalog. Always the same for the same index.
	pub fn synthetic(idx: usize, modified: OffsetDateTime) -> Self {
		let noun = NOUNS[idx % NOUNS.len()];
		let name = format!("{} {}", ADJECTIVES[idx % ADJECTIVES.len()], noun);
		let sku = format!("SKU-{:04}", idx + 1);
		let regular = 9.99 + (idx % 7) as f64 * 5.0;
		let sale_price = (idx % 4 == 3).then(|| format!("{:.2}", regular * 0.8));
		let regular_price = format!("{regular:.2}");
		let (stock_status, stock_quantity) = match idx {
			i if i % 5 == 3 => (StockStatus::OutOfStock, Some(0)),
			i if i % 7 == 6 => (StockStatus::OnBackorder, None),
			i => (StockStatus::InStock, Some(((i * 7) % 50 + 1) as u32)),
		};
		let status = match idx {
			i if i % 6 == 5 => PublishStatus::Draft,
			i if i % 9 == 8 => PublishStatus::Pending,
			_ => PublishStatus::Publish,
		};
		let sync_status = match idx % 3 {
			0 => SyncStatus::Synced,
			_ => SyncStatus::NotSynced,
		};
		Self {
			id: 1000 + idx as u64,
			price: sale_price.clone().unwrap_or_else(|| regular_price.clone()),
			regular_price,
			sale_price,
			stock_status,
			stock_quantity,
			categories: vec![CATEGORIES[idx % CATEGORIES.len()].to_owned()],
			images: vec![format!("https://picsum.photos/seed/{sku}/64")],
			name,
			sku,
			status,
			sync_status,
			sync_error: None,
			date_modified: modified,
		}
	}

	pub fn is_on_sale(&self) -> bool {
		self.sale_price.is_some()
	}
}

/// Counts of products that ended up synced and that failed to sync.
pub fn sync_summary(products: &[Product]) -> (usize, usize) {
	products.iter().fold((0, 0), |(synced, errors), product| match product.sync_status {
		SyncStatus::Synced => (synced + 1, errors),
		SyncStatus::Error => (synced, errors + 1),
		SyncStatus::NotSynced | SyncStatus::Syncing => (synced, errors),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn synthetic_products_are_stable() {
		let now = OffsetDateTime::UNIX_EPOCH;
		assert_eq!(Product::synthetic(7, now), Product::synthetic(7, now));
		let first = Product::synthetic(0, now);
		assert_eq!(first.name, "Classic T-Shirt");
		assert_eq!(first.sku, "SKU-0001");
		assert_eq!(first.price, "9.99");
		assert_eq!(first.stock_status, StockStatus::InStock);
	}

	#[test]
	fn sale_price_is_the_price() {
		let product = Product::synthetic(3, OffsetDateTime::UNIX_EPOCH);
		assert!(product.is_on_sale());
		assert_eq!(product.regular_price, "24.99");
		assert_eq!(Some(product.price.clone()), product.sale_price);
		assert_eq!(product.stock_status, StockStatus::OutOfStock);
		assert_eq!(product.stock_quantity, Some(0));
	}

	#[test]
	fn statuses_serialize_like_woocommerce() {
		assert_eq!(serde_json::to_string(&SyncStatus::NotSynced).unwrap(), "\"not_synced\"");
		assert_eq!(serde_json::to_string(&StockStatus::OnBackorder).unwrap(), "\"onbackorder\"");
		assert_eq!(serde_json::to_string(&PublishStatus::Publish).unwrap(), "\"publish\"");
	}

	#[test]
	fn summary_counts_outcomes() {
		let now = OffsetDateTime::UNIX_EPOCH;
		let mut products = (0..4).map(|idx| Product::synthetic(idx, now)).collect::<Vec<_>>();
		products[0].sync_status = SyncStatus::Synced;
		products[1].sync_status = SyncStatus::Error;
		products[2].sync_status = SyncStatus::Error;
		products[3].sync_status = SyncStatus::NotSynced;
		assert_eq!(sync_summary(&products), (1, 2));
	}
}
