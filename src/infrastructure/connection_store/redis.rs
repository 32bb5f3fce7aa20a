//! Redis 连接表实现
//!
//! 整张表存成一个 hash，field 为连接 ID，value 为整行 JSON。

use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::models::Connection;
use crate::domain::repositories::ConnectionStore;
use crate::error::{GatewayError, Result};

pub struct RedisConnectionStore {
    client: Arc<redis::Client>,
    table: String,
}

impl RedisConnectionStore {
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
impl ConnectionStore for RedisConnectionStore {
    async fn insert(&self, connection: Connection) -> Result<()> {
        let mut conn = self.connection().await?;
        let payload = serde_json::to_string(&connection)
            .map_err(|err| GatewayError::Store(format!("failed to encode connection: {err}")))?;
        let _: () = conn
            .hset(&self.table, &connection.connection_id, payload)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to insert connection: {err}")))?;
        Ok(())
    }

    async fn remove(&self, connection_id: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: usize = conn
            .hdel(&self.table, connection_id)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to remove connection: {err}")))?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Connection>> {
        let mut conn = self.connection().await?;
        let payloads: Vec<String> = conn
            .hvals(&self.table)
            .await
            .map_err(|err| GatewayError::Store(format!("failed to scan connections: {err}")))?;

        let mut connections = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let connection: Connection = serde_json::from_str(&payload)
                .map_err(|err| GatewayError::Store(format!("invalid connection row: {err}")))?;
            connections.push(connection);
        }
        Ok(connections)
    }
}
