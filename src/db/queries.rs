use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::StoreError;
use crate::models::{Record, Table};

/// Upsert: a record whose key already exists replaces the stored item.
pub fn put_record(conn: &Connection, table: Table, record: &Record) -> Result<(), StoreError> {
    let item = serde_json::to_string(record)?;
    let written_at = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();
    let key_field = record.key_field();

    let sql = format!(
        "INSERT INTO {table} ({key_field}, item, written_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT({key_field}) DO UPDATE SET
           item = excluded.item,
           written_at = excluded.written_at"
    );
    conn.execute(&sql, params![record.key().as_str(), item, written_at])?;
    Ok(())
}

pub fn get_item(
    conn: &Connection,
    table: Table,
    key_field: &str,
    key: &str,
) -> Result<Option<serde_json::Value>, StoreError> {
    let sql = format!("SELECT item FROM {table} WHERE {key_field} = ?1");
    let item: Option<String> = conn
        .query_row(&sql, params![key], |row| row.get(0))
        .optional()?;

    match item {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn count_records(conn: &Connection, table: Table) -> Result<i64, StoreError> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}
