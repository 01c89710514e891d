use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use super::RecordStore;
use crate::db::queries;
use crate::errors::StoreError;
use crate::models::{Record, Table};

pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.db)
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn put(&self, table: Table, record: &Record) -> Result<(), StoreError> {
        let db = self.db.lock().map_err(|_| StoreError::Poisoned)?;
        queries::put_record(&db, table, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::CompositeKey;

    #[tokio::test]
    async fn test_sqlite_store_put() {
        let conn = db::init_db(":memory:").unwrap();
        let store = SqliteStore::new(Arc::new(Mutex::new(conn)));
        let record = Record::new("BookingID", CompositeKey::from_parts(&["Denver", "SUV", "2024-06-03"]))
            .field("PickUpCity", "Denver");

        store.put(Table::CarBookings, &record).await.unwrap();

        let db = store.connection();
        let db = db.lock().unwrap();
        let item = queries::get_item(&db, Table::CarBookings, "BookingID", "DenverSUV2024-06-03")
            .unwrap()
            .unwrap();
        assert_eq!(item["PickUpCity"], "Denver");
    }
}
