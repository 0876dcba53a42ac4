use super::{Database, DatabaseError, Record};
use crate::{storage::StoreExt, woo::Credentials};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// WooCommerce API credentials owned by a single user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
	pub user_id: Uuid,
	#[serde(flatten)]
	pub credentials: Credentials,
}
impl Record for Settings {
	fn store_id() -> &'static str {
		"woocommerce_settings"
	}
}

// Older builds kept a single, ownerless credentials object under the same key.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySettings {
	site_url: String,
	consumer_key: String,
	consumer_secret: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSettings {
	PerUser(Vec<Settings>),
	Legacy(LegacySettings),
}

impl Database {
	/// Inserts or replaces the credentials for `settings.user_id`.
	pub fn save_settings(&self, settings: Settings) -> Result<(), DatabaseError> {
		let mut all = self.per_user_settings(None)?;
		match all.iter_mut().find(|existing| existing.user_id == settings.user_id) {
			Some(existing) => *existing = settings,
			None => all.push(settings),
		}
		self.store().set_json(Settings::store_id(), &all)?;
		Ok(())
	}

	pub fn settings_for_user(&self, user_id: &Uuid) -> Result<Option<Settings>, DatabaseError> {
		let all = self.per_user_settings(Some(user_id))?;
		Ok(all.into_iter().find(|settings| &settings.user_id == user_id))
	}

	/// Reads the settings collection. A legacy blob is adopted by `claimant`
	/// (and rewritten in the per-user shape) or dropped when there is nobody to claim it.
	fn per_user_settings(&self, claimant: Option<&Uuid>) -> Result<Vec<Settings>, DatabaseError> {
		let stored = self.store().get_json::<StoredSettings>(Settings::store_id())?;
		match stored {
			None => Ok(Vec::new()),
			Some(StoredSettings::PerUser(all)) => Ok(all),
			Some(StoredSettings::Legacy(legacy)) => {
				let Some(user_id) = claimant else {
					log::warn!(target: "database", "discarding unowned legacy credentials");
					return Ok(Vec::new());
				};
				log::info!(target: "database", "migrating legacy credentials to user {user_id}");
				let migrated = vec![Settings {
					user_id: *user_id,
					credentials: Credentials {
						site_url: legacy.site_url,
						consumer_key: legacy.consumer_key,
						consumer_secret: legacy.consumer_secret,
					},
				}];
				self.store().set_json(Settings::store_id(), &migrated)?;
				Ok(migrated)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::{MemoryStore, Store};
	use std::rc::Rc;

	fn credentials(site: &str) -> Credentials {
		Credentials {
			site_url: site.into(),
			consumer_key: "ck_1".into(),
			consumer_secret: "cs_1".into(),
		}
	}

	#[test]
	fn save_upserts_by_user() {
		let database = super::super::in_memory();
		let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
		database
			.save_settings(Settings {
				user_id: alice,
				credentials: credentials("https://a.example"),
			})
			.unwrap();
		database
			.save_settings(Settings {
				user_id: bob,
				credentials: credentials("https://b.example"),
			})
			.unwrap();
		database
			.save_settings(Settings {
				user_id: alice,
				credentials: credentials("https://a2.example"),
			})
			.unwrap();

		let all = database.all::<Settings>().unwrap();
		assert_eq!(all.len(), 2);
		let saved = database.settings_for_user(&alice).unwrap().unwrap();
		assert_eq!(saved.credentials.site_url, "https://a2.example");
		assert_eq!(database.settings_for_user(&Uuid::new_v4()).unwrap(), None);
	}

	#[test]
	fn stored_shape_is_flat() {
		let database = super::super::in_memory();
		let user_id = Uuid::nil();
		database
			.save_settings(Settings {
				user_id,
				credentials: credentials("https://shop.example"),
			})
			.unwrap();
		let raw = database.store().get("woocommerce_settings").unwrap().unwrap();
		let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
		assert_eq!(value[0]["site_url"], "https://shop.example");
		assert_eq!(value[0]["consumer_key"], "ck_1");
		assert_eq!(value[0]["user_id"], Uuid::nil().to_string());
	}

	#[test]
	fn legacy_object_is_adopted_by_first_reader() {
		let store = MemoryStore::new().with_entry(
			"woocommerce_settings",
			r#"{"siteUrl":"https://old.example","consumerKey":"ck_old","consumerSecret":"cs_old"}"#,
		);
		let database = Database::new(Rc::new(store));
		let user_id = Uuid::new_v4();

		let adopted = database.settings_for_user(&user_id).unwrap().unwrap();
		assert_eq!(adopted.credentials.site_url, "https://old.example");
		assert_eq!(adopted.credentials.consumer_secret, "cs_old");

		let all = database.all::<Settings>().unwrap();
		assert_eq!(all, vec![adopted]);
	}

	#[test]
	fn legacy_object_is_replaced_on_save() {
		let store = MemoryStore::new().with_entry(
			"woocommerce_settings",
			r#"{"siteUrl":"https://old.example","consumerKey":"k","consumerSecret":"s"}"#,
		);
		let database = Database::new(Rc::new(store));
		let user_id = Uuid::new_v4();
		database
			.save_settings(Settings {
				user_id,
				credentials: credentials("https://new.example"),
			})
			.unwrap();
		assert_eq!(database.all::<Settings>().unwrap().len(), 1);
	}
}
