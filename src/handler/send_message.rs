//! sendmessage 路由处理器：向除发送者外的全部连接扇出消息
//!
//! 尽力而为、至多一次、不保证接收方之间的顺序；
//! 单个连接推送失败只记日志，不影响整体结果，也不清理失效连接。

use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, warn};

use crate::domain::repositories::{ConnectionStore, DeliveryChannel};
use crate::error::{GatewayError, Result};
use crate::interface::events::{RoutedEvent, WsResponse};

/// 入站消息体，message 原文透传，不校验也不限长
#[derive(Debug, Deserialize)]
struct SendMessagePayload {
    message: String,
}

pub struct SendMessageHandler {
    connections: Arc<dyn ConnectionStore>,
    delivery: Arc<dyn DeliveryChannel>,
}

impl SendMessageHandler {
    pub fn new(connections: Arc<dyn ConnectionStore>, delivery: Arc<dyn DeliveryChannel>) -> Self {
        Self {
            connections,
            delivery,
        }
    }

    /// 扫描失败返回 500、不投递任何消息；扫描成功后结果恒为 200。
    /// 消息体缺失或不是合法 JSON 时返回 Err，由分发器处理。
    pub async fn handle(&self, event: &RoutedEvent) -> Result<WsResponse> {
        let sender_id = &event.request_context.connection_id;

        let connections = match self.connections.scan().await {
            Ok(connections) => connections,
            Err(err) => {
                error!(error = %err, "connection scan failed");
                return Ok(WsResponse::server_error());
            }
        };

        let endpoint = event.endpoint();
        let body = event
            .body
            .as_deref()
            .ok_or_else(|| GatewayError::InvalidEvent("missing event body".to_string()))?;
        let payload: SendMessagePayload = serde_json::from_str(body)?;

        for connection in &connections {
            if connection.connection_id == *sender_id {
                continue;
            }
            if let Err(err) = self
                .delivery
                .post_to_connection(&endpoint, &connection.connection_id, &payload.message)
                .await
            {
                warn!(
                    error = %err,
                    connection_id = %connection.connection_id,
                    "failed to push message"
                );
            }
        }

        Ok(WsResponse::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Connection;
    use crate::handler::test_support::{
        FailingConnectionStore, MockDeliveryChannel, routed_event,
    };
    use crate::infrastructure::InMemoryConnectionStore;

    async fn store_with(ids: &[&str]) -> Arc<InMemoryConnectionStore> {
        let store = Arc::new(InMemoryConnectionStore::new());
        for id in ids {
            store.insert(Connection::new(*id)).await.unwrap();
        }
        store
    }

    const BODY: &str = r#"{"action":"sendmessage","message":"hi"}"#;

    #[tokio::test]
    async fn broadcasts_to_all_but_sender() {
        let store = store_with(&["c-1", "c-2", "c-3", "c-4"]).await;
        let delivery = Arc::new(MockDeliveryChannel::new());
        let handler = SendMessageHandler::new(store, delivery.clone());

        let response = handler.handle(&routed_event("c-2", Some(BODY))).await.unwrap();

        assert_eq!(response, WsResponse::ok());
        assert_eq!(delivery.attempt_count(), 3);
        let delivered = delivery.delivered_to();
        assert!(delivered.iter().all(|(id, _)| id != "c-2"));
        assert!(delivered.iter().all(|(_, data)| data == "hi"));
    }

    #[tokio::test]
    async fn empty_registry_means_no_pushes() {
        let store = store_with(&[]).await;
        let delivery = Arc::new(MockDeliveryChannel::new());
        let handler = SendMessageHandler::new(store, delivery.clone());

        let response = handler.handle(&routed_event("c-1", Some(BODY))).await.unwrap();

        assert_eq!(response, WsResponse::ok());
        assert_eq!(delivery.attempt_count(), 0);
    }

    #[tokio::test]
    async fn push_failures_do_not_change_result() {
        let store = store_with(&["c-1", "c-2", "c-3", "c-4"]).await;
        let delivery = Arc::new(
            MockDeliveryChannel::new()
                .with_failed_push("c-3")
                .with_failed_push("c-4"),
        );
        let handler = SendMessageHandler::new(store, delivery.clone());

        let response = handler.handle(&routed_event("c-1", Some(BODY))).await.unwrap();

        // 失败的推送尝试也计数，整体结果不变
        assert_eq!(response, WsResponse::ok());
        assert_eq!(delivery.attempt_count(), 3);
        assert_eq!(delivery.delivered_to().len(), 1);
    }

    #[tokio::test]
    async fn scan_failure_returns_500_without_delivery() {
        let delivery = Arc::new(MockDeliveryChannel::new());
        let handler = SendMessageHandler::new(Arc::new(FailingConnectionStore), delivery.clone());

        let response = handler.handle(&routed_event("c-1", Some(BODY))).await.unwrap();

        assert_eq!(response, WsResponse::server_error());
        assert_eq!(delivery.attempt_count(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_a_handler_error() {
        let store = store_with(&["c-1", "c-2"]).await;
        let delivery = Arc::new(MockDeliveryChannel::new());
        let handler = SendMessageHandler::new(store, delivery.clone());

        let err = handler
            .handle(&routed_event("c-1", Some("{")))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedBody(_)));

        let err = handler.handle(&routed_event("c-1", None)).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidEvent(_)));

        assert_eq!(delivery.attempt_count(), 0);
    }
}
