//! SQLite persistence for synchronized records.
//!
//! All access goes through [`StorageManager::perform`], which hands the
//! closure an explicit transaction. Accessors are free functions over a
//! `&Connection`; a `Transaction` derefs to one, so they compose inside a
//! single `perform` call.

mod account;
mod device;
mod event;
mod manager;
mod schema;

use thiserror::Error;

pub use account::{delete_account, load_account, upsert_account};
pub use device::{delete_device, delete_devices, load_device, load_devices, upsert_device};
pub use event::{
    delete_events, delete_events_in_category, load_event, load_events, upsert_event,
};
pub use manager::StorageManager;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage task failed: {0}")]
    Join(String),
}
