// Adapters layer: concrete implementations of the domain ports.

pub mod json_store;
pub mod local_storage;

pub use json_store::JsonRosterStore;
pub use local_storage::LocalStorage;

use crate::domain::ports::{RosterStore, Storage};
use crate::domain::roster::Roster;
use crate::utils::error::Result;

fn store_at(path: &str) -> JsonRosterStore<LocalStorage> {
    JsonRosterStore::new(LocalStorage::default(), path)
}

pub async fn load_roster(path: &str) -> Result<Roster> {
    store_at(path).load().await
}

pub async fn save_roster(path: &str, roster: &Roster) -> Result<()> {
    store_at(path).save(roster).await
}

pub async fn file_exists(path: &str) -> bool {
    LocalStorage::default().exists(path).await
}
