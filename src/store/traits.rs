//! Trait abstraction for the hosted table to enable mocking in tests

use super::error::StoreError;
use crate::state::{Receipt, Record};
use async_trait::async_trait;

/// Remote store that appends records to a table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one record into `table`
    async fn insert(&self, table: &str, record: &Record) -> Result<Receipt, StoreError>;
}
