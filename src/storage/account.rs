use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::Account;

use super::StorageError;

fn read_account(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        user_id: row.get(0)?,
        display_name: row.get(1)?,
        email: row.get(2)?,
        username: row.get(3)?,
        gravatar_url: row.get(4)?,
        profile_url: row.get(5)?,
        email_verified: row.get(6)?,
    })
}

pub fn load_account(conn: &Connection, user_id: i64) -> Result<Option<Account>, StorageError> {
    let account = conn
        .query_row(
            "SELECT user_id, display_name, email, username, gravatar_url, profile_url, email_verified
             FROM accounts WHERE user_id = ?1",
            params![user_id],
            read_account,
        )
        .optional()?;
    Ok(account)
}

/// Insert the account or overwrite the stored row with the same `user_id`.
pub fn upsert_account(conn: &Connection, account: &Account) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO accounts (user_id, display_name, email, username, gravatar_url, profile_url, email_verified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id) DO UPDATE SET
             display_name = excluded.display_name,
             email = excluded.email,
             username = excluded.username,
             gravatar_url = excluded.gravatar_url,
             profile_url = excluded.profile_url,
             email_verified = excluded.email_verified",
        params![
            account.user_id,
            account.display_name,
            account.email,
            account.username,
            account.gravatar_url,
            account.profile_url,
            account.email_verified,
        ],
    )?;
    Ok(())
}

/// Returns whether a row was removed.
pub fn delete_account(conn: &Connection, user_id: i64) -> Result<bool, StorageError> {
    let removed = conn.execute("DELETE FROM accounts WHERE user_id = ?1", params![user_id])?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageManager;

    fn account(user_id: i64, email: &str) -> Account {
        Account {
            user_id,
            display_name: "Mate".to_string(),
            email: email.to_string(),
            username: "mate".to_string(),
            gravatar_url: Some("https://gravatar.com/avatar/1".to_string()),
            profile_url: None,
            email_verified: true,
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let storage = StorageManager::in_memory().unwrap();

        let stored = storage
            .perform(|tx| {
                upsert_account(tx, &account(1, "old@example.com"))?;
                upsert_account(tx, &account(1, "new@example.com"))?;
                let count: i64 = tx.query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))?;
                assert_eq!(count, 1);
                load_account(tx, 1)
            })
            .await
            .unwrap();

        assert_eq!(stored, Some(account(1, "new@example.com")));
    }

    #[tokio::test]
    async fn test_delete_account() {
        let storage = StorageManager::in_memory().unwrap();

        let (first, second) = storage
            .perform(|tx| {
                upsert_account(tx, &account(2, "a@b.com"))?;
                Ok((delete_account(tx, 2)?, delete_account(tx, 2)?))
            })
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
    }
}
