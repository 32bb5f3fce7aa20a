//! 默认路由处理器：未匹配任何应用路由时，向发送者回推用法提示

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::warn;

use crate::domain::repositories::DeliveryChannel;
use crate::interface::events::{RoutedEvent, WsResponse};

/// 回包里的固定用法提示
pub const USAGE_HINT: &str = "Use the sendmessage route to send a message. Your info:";

pub struct DefaultHandler {
    delivery: Arc<dyn DeliveryChannel>,
}

impl DefaultHandler {
    pub fn new(delivery: Arc<dyn DeliveryChannel>) -> Self {
        Self { delivery }
    }

    /// 先取发送者自己的连接元数据，再把提示连同元数据推回去。
    /// 任一外部调用失败即返回 500，不重试；两步都成功才返回 200。
    pub async fn handle(&self, event: &RoutedEvent) -> WsResponse {
        let connection_id = &event.request_context.connection_id;
        let endpoint = event.endpoint();

        let mut info = match self.delivery.connection_info(&endpoint, connection_id).await {
            Ok(info) => info,
            Err(err) => {
                warn!(error = %err, connection_id = %connection_id, "failed to fetch connection info");
                return WsResponse::server_error();
            }
        };

        // 回包元数据里的连接 ID 用 connectionID 键，与存储字段 connectionId
        // 大小写不同；线上客户端可能依赖这个键，保持原样
        if let Value::Object(map) = &mut info {
            map.insert("connectionID".to_string(), json!(connection_id));
        }

        let payload = json!({
            "message": USAGE_HINT,
            "connectionInfo": info,
        });

        match self
            .delivery
            .post_to_connection(&endpoint, connection_id, &payload.to_string())
            .await
        {
            Ok(()) => WsResponse::ok(),
            Err(err) => {
                warn!(error = %err, connection_id = %connection_id, "failed to push usage hint");
                WsResponse::server_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::{MockDeliveryChannel, routed_event};

    #[tokio::test]
    async fn echoes_usage_hint_with_connection_info() {
        let delivery = Arc::new(MockDeliveryChannel::new());
        let handler = DefaultHandler::new(delivery.clone());

        let response = handler.handle(&routed_event("c-1", None)).await;

        assert_eq!(response, WsResponse::ok());
        let delivered = delivery.delivered_to();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "c-1");

        let payload: Value = serde_json::from_str(&delivered[0].1).unwrap();
        assert_eq!(payload["message"], json!(USAGE_HINT));
        // 元数据原样带回，连接 ID 挂在 connectionID 键下
        assert_eq!(payload["connectionInfo"]["connectionID"], json!("c-1"));
        assert_eq!(
            payload["connectionInfo"]["ConnectedAt"],
            json!("2025-08-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn metadata_fetch_failure_is_terminal() {
        let delivery = Arc::new(MockDeliveryChannel::new().with_failed_connection_info());
        let handler = DefaultHandler::new(delivery.clone());

        let response = handler.handle(&routed_event("c-1", None)).await;

        assert_eq!(response, WsResponse::server_error());
        assert_eq!(delivery.attempt_count(), 0);
    }

    #[tokio::test]
    async fn push_failure_returns_500() {
        let delivery = Arc::new(MockDeliveryChannel::new().with_failed_push("c-1"));
        let handler = DefaultHandler::new(delivery);

        let response = handler.handle(&routed_event("c-1", None)).await;

        assert_eq!(response, WsResponse::server_error());
    }
}
