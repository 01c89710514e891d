pub mod sqlite;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Record, Table};

/// Durable keyed collections. Only writes are needed to fulfill an intent.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put(&self, table: Table, record: &Record) -> Result<(), StoreError>;
}
