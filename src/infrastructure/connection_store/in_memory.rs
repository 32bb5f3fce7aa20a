use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::Connection;
use crate::domain::repositories::ConnectionStore;
use crate::error::Result;

#[derive(Default)]
pub struct InMemoryConnectionStore {
    inner: Arc<RwLock<HashMap<String, Connection>>>,
}

impl InMemoryConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionStore for InMemoryConnectionStore {
    async fn insert(&self, connection: Connection) -> Result<()> {
        let mut guard = self.inner.write().await;
        guard.insert(connection.connection_id.clone(), connection);
        Ok(())
    }

    async fn remove(&self, connection_id: &str) -> Result<()> {
        let mut guard = self.inner.write().await;
        guard.remove(connection_id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Connection>> {
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }
}
