use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rusqlite::{Connection, Transaction};

use super::schema::SCHEMA;
use super::StorageError;

/// Owner of the database connection.
///
/// Cloning is cheap; clones share the connection. Work is serialized on the
/// connection mutex and executed off the async runtime.
#[derive(Clone)]
pub struct StorageManager {
    conn: Arc<Mutex<Connection>>,
}

impl StorageManager {
    /// Open (or create) the database file at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
        tracing::debug!(path = %path.display(), "Opened storage");
        Self::initialize(conn)
    }

    /// Database that lives only as long as this manager.
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self, StorageError> {
        conn.execute("PRAGMA foreign_keys=ON;", [])?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `work` inside one transaction on a blocking thread.
    ///
    /// Commits when `work` returns `Ok`; any error rolls the transaction back.
    pub async fn perform<T, F>(&self, work: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock();
            let tx = conn.transaction()?;
            let value = work(&tx)?;
            tx.commit()?;
            Ok(value)
        })
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_account, upsert_account};
    use crate::model::Account;

    fn account(user_id: i64) -> Account {
        Account {
            user_id,
            display_name: "Mate".to_string(),
            email: "mate@example.com".to_string(),
            username: "mate".to_string(),
            gravatar_url: None,
            profile_url: None,
            email_verified: false,
        }
    }

    #[tokio::test]
    async fn test_failed_work_rolls_back() {
        let storage = StorageManager::in_memory().unwrap();

        let result: Result<(), StorageError> = storage
            .perform(|tx| {
                upsert_account(tx, &account(1))?;
                Err(StorageError::Join("abort".to_string()))
            })
            .await;
        assert!(result.is_err());

        let loaded = storage.perform(|tx| load_account(tx, 1)).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_managers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mate.sqlite");

        let storage = StorageManager::open(&path).unwrap();
        storage
            .perform(|tx| upsert_account(tx, &account(3)))
            .await
            .unwrap();
        drop(storage);

        let reopened = StorageManager::open(&path).unwrap();
        let loaded = reopened.perform(|tx| load_account(tx, 3)).await.unwrap();
        assert_eq!(loaded, Some(account(3)));
    }

    #[test]
    fn test_unusable_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result = StorageManager::open(&blocker.join("mate.sqlite"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
