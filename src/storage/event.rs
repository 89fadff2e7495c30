use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::MateEvent;

use super::StorageError;

const EVENT_COLUMNS: &str =
    "event_id, user_id, category_id, title, description, location, starts_at, ends_at";

fn read_event(row: &Row<'_>) -> rusqlite::Result<MateEvent> {
    Ok(MateEvent {
        event_id: row.get(0)?,
        user_id: row.get(1)?,
        category_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        location: row.get(5)?,
        starts_at: row.get(6)?,
        ends_at: row.get(7)?,
    })
}

pub fn load_event(conn: &Connection, event_id: i64) -> Result<Option<MateEvent>, StorageError> {
    let sql = format!("SELECT {} FROM events WHERE event_id = ?1", EVENT_COLUMNS);
    let event = conn
        .query_row(&sql, params![event_id], read_event)
        .optional()?;
    Ok(event)
}

/// Every stored event of `user_id`, earliest first.
pub fn load_events(conn: &Connection, user_id: i64) -> Result<Vec<MateEvent>, StorageError> {
    let sql = format!(
        "SELECT {} FROM events WHERE user_id = ?1 ORDER BY starts_at, event_id",
        EVENT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let events = stmt
        .query_map(params![user_id], read_event)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(events)
}

pub fn upsert_event(conn: &Connection, event: &MateEvent) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO events (event_id, user_id, category_id, title, description, location, starts_at, ends_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(event_id) DO UPDATE SET
             user_id = excluded.user_id,
             category_id = excluded.category_id,
             title = excluded.title,
             description = excluded.description,
             location = excluded.location,
             starts_at = excluded.starts_at,
             ends_at = excluded.ends_at",
        params![
            event.event_id,
            event.user_id,
            event.category_id,
            event.title,
            event.description,
            event.location,
            event.starts_at,
            event.ends_at,
        ],
    )?;
    Ok(())
}

/// Delete every event owned by `user_id`; returns how many were removed.
pub fn delete_events(conn: &Connection, user_id: i64) -> Result<usize, StorageError> {
    let removed = conn.execute("DELETE FROM events WHERE user_id = ?1", params![user_id])?;
    Ok(removed)
}

/// Delete the events of `user_id` filed under `category_id`.
pub fn delete_events_in_category(
    conn: &Connection,
    user_id: i64,
    category_id: i64,
) -> Result<usize, StorageError> {
    let removed = conn.execute(
        "DELETE FROM events WHERE user_id = ?1 AND category_id = ?2",
        params![user_id, category_id],
    )?;
    Ok(removed)
}
