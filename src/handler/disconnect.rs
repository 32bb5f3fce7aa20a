//! `$disconnect` 路由处理器：按连接 ID 清理连接表

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::repositories::ConnectionStore;
use crate::interface::events::{ConnectionEvent, WsResponse};

pub struct DisconnectHandler {
    connections: Arc<dyn ConnectionStore>,
}

impl DisconnectHandler {
    pub fn new(connections: Arc<dyn ConnectionStore>) -> Self {
        Self { connections }
    }

    /// 按主键删除连接记录（不存在也算成功）。
    /// 删除成功返回 200，存储出错返回 500，不重试。
    pub async fn handle(&self, event: &ConnectionEvent) -> WsResponse {
        let connection_id = &event.request_context.connection_id;

        match self.connections.remove(connection_id).await {
            Ok(()) => {
                info!(connection_id = %connection_id, "connection removed");
                WsResponse::ok()
            }
            Err(err) => {
                error!(error = %err, connection_id = %connection_id, "failed to remove connection");
                WsResponse::server_error()
            }
        }
    }
}
