use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::{RecordItem, record_key};
use crate::domain::repositories::RecordStore;
use crate::error::Result;

#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: Arc<RwLock<HashMap<String, RecordItem>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, item: RecordItem) -> Result<()> {
        let key = record_key(&item)?;
        let mut guard = self.inner.write().await;
        guard.insert(key, item);
        Ok(())
    }

    async fn get(&self, record_id: &str) -> Result<Option<RecordItem>> {
        let guard = self.inner.read().await;
        Ok(guard.get(record_id).cloned())
    }

    async fn delete(&self, record_id: &str) -> Result<()> {
        let mut guard = self.inner.write().await;
        guard.remove(record_id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<RecordItem>> {
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }
}
