//! Redis 用户记录表实现
//!
//! 与连接表同一形状：整张表一个 hash，field 为 userId，value 为整行 JSON。

use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::models::{RecordItem, record_key};
use crate::domain::repositories::RecordStore;
use crate::error::{GatewayError, Result};

pub struct RedisRecordStore {
    client: Arc<redis::Client>,
    table: String,
}

impl RedisRecordStore {
    pub fn new(client: Arc<redis::Client>, table: String) -> Self {
        Self { client, table }
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        ConnectionManager::new(self.client.as_ref().clone())
            .await
            .map_err(|err| GatewayError::Store(format!("failed to open redis connection: {err}")))
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn put(&self, item: RecordItem) -> Result<()> {
        let key = record_key(&item)?;
        let mut conn = self.connection().await?;
        let payload = serde_json::to_string(&item)
            .map_err(|err| GatewayError::Store(format!("failed to encode record: {err}")))?;
        let _: () = conn
            .hset(&self.table, &key, payload)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to put record: {err}")))?;
        Ok(())
    }

    async fn get(&self, record_id: &str) -> Result<Option<RecordItem>> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .hget(&self.table, record_id)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to get record: {err}")))?;

        match payload {
            Some(raw) => {
                let item: RecordItem = serde_json::from_str(&raw)
                    .map_err(|err| GatewayError::Store(format!("invalid record row: {err}")))?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, record_id: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: usize = conn
            .hdel(&self.table, record_id)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to delete record: {err}")))?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<RecordItem>> {
        let mut conn = self.connection().await?;
        let payloads: Vec<String> = conn
            .hvals(&self.table)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to scan records: {err}")))?;

        let mut items = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let item: RecordItem = serde_json::from_str(&payload)
                .map_err(|err| GatewayError::Store(format!("invalid record row: {err}")))?;
            items.push(item);
        }
        Ok(items)
    }
}
