use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::MateDevice;

use super::StorageError;

fn read_device(row: &Row<'_>) -> rusqlite::Result<MateDevice> {
    Ok(MateDevice {
        device_id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        model: row.get(3)?,
        os_version: row.get(4)?,
    })
}

pub fn load_device(conn: &Connection, device_id: i64) -> Result<Option<MateDevice>, StorageError> {
    let device = conn
        .query_row(
            "SELECT device_id, user_id, name, model, os_version FROM devices WHERE device_id = ?1",
            params![device_id],
            read_device,
        )
        .optional()?;
    Ok(device)
}

pub fn load_devices(conn: &Connection, user_id: i64) -> Result<Vec<MateDevice>, StorageError> {
    let mut stmt = conn.prepare(
        "SELECT device_id, user_id, name, model, os_version FROM devices
         WHERE user_id = ?1 ORDER BY device_id",
    )?;
    let devices = stmt
        .query_map(params![user_id], read_device)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(devices)
}

pub fn upsert_device(conn: &Connection, device: &MateDevice) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO devices (device_id, user_id, name, model, os_version)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(device_id) DO UPDATE SET
             user_id = excluded.user_id,
             name = excluded.name,
             model = excluded.model,
             os_version = excluded.os_version",
        params![
            device.device_id,
            device.user_id,
            device.name,
            device.model,
            device.os_version,
        ],
    )?;
    Ok(())
}

pub fn delete_device(conn: &Connection, device_id: i64) -> Result<bool, StorageError> {
    let removed = conn.execute("DELETE FROM devices WHERE device_id = ?1", params![device_id])?;
    Ok(removed > 0)
}

pub fn delete_devices(conn: &Connection, user_id: i64) -> Result<usize, StorageError> {
    let removed = conn.execute("DELETE FROM devices WHERE user_id = ?1", params![user_id])?;
    Ok(removed)
}
