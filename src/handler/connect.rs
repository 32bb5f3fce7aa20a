//! `$connect` 路由处理器：把新连接写入连接表

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::models::Connection;
use crate::domain::repositories::ConnectionStore;
use crate::interface::events::{ConnectionEvent, WsResponse};

pub struct ConnectHandler {
    connections: Arc<dyn ConnectionStore>,
}

impl ConnectHandler {
    pub fn new(connections: Arc<dyn ConnectionStore>) -> Self {
        Self { connections }
    }

    /// 无条件插入连接 ID（已存在则覆盖，幂等）。
    /// 写入成功返回 200，存储出错返回 500，不重试。
    pub async fn handle(&self, event: &ConnectionEvent) -> WsResponse {
        let connection_id = &event.request_context.connection_id;

        match self
            .connections
            .insert(Connection::new(connection_id.clone()))
            .await
        {
            Ok(()) => {
                info!(connection_id = %connection_id, "connection registered");
                WsResponse::ok()
            }
            Err(err) => {
                error!(error = %err, connection_id = %connection_id, "failed to register connection");
                WsResponse::server_error()
            }
        }
    }
}
