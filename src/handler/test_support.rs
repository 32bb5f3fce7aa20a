//! 处理器测试辅助：可注入故障的存储与投递通道替身

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::models::{Connection, Endpoint};
use crate::domain::repositories::{ConnectionStore, DeliveryChannel};
use crate::error::{GatewayError, Result};
use crate::interface::events::{
    ConnectionContext, ConnectionEvent, HttpRequestEvent, RequestContext, RoutedEvent,
};

/// 记录每次推送尝试的投递通道替身
pub(crate) struct MockDeliveryChannel {
    /// 全部推送尝试的目标连接 ID，含失败的
    pub attempts: Mutex<Vec<String>>,
    /// 成功投递的 (connection_id, data)
    pub delivered: Mutex<Vec<(String, String)>>,
    fail_push_for: HashSet<String>,
    fail_connection_info: bool,
    info: Value,
}

impl MockDeliveryChannel {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            delivered: Mutex::new(Vec::new()),
            fail_push_for: HashSet::new(),
            fail_connection_info: false,
            info: json!({"ConnectedAt": "2025-08-01T00:00:00Z"}),
        }
    }

    pub fn with_failed_push(mut self, connection_id: &str) -> Self {
        self.fail_push_for.insert(connection_id.to_string());
        self
    }

    pub fn with_failed_connection_info(mut self) -> Self {
        self.fail_connection_info = true;
        self
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn delivered_to(&self) -> Vec<(String, String)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryChannel for MockDeliveryChannel {
    async fn connection_info(&self, _endpoint: &Endpoint, _connection_id: &str) -> Result<Value> {
        if self.fail_connection_info {
            return Err(GatewayError::Delivery(
                "connection info unavailable".to_string(),
            ));
        }
        Ok(self.info.clone())
    }

    async fn post_to_connection(
        &self,
        _endpoint: &Endpoint,
        connection_id: &str,
        data: &str,
    ) -> Result<()> {
        self.attempts.lock().unwrap().push(connection_id.to_string());
        if self.fail_push_for.contains(connection_id) {
            return Err(GatewayError::Delivery(format!(
                "connection gone: {connection_id}"
            )));
        }
        self.delivered
            .lock()
            .unwrap()
            .push((connection_id.to_string(), data.to_string()));
        Ok(())
    }
}

/// 所有操作都失败的连接表替身
pub(crate) struct FailingConnectionStore;

#[async_trait]
impl ConnectionStore for FailingConnectionStore {
    async fn insert(&self, _connection: Connection) -> Result<()> {
        Err(GatewayError::Store("store unavailable".to_string()))
    }

    async fn remove(&self, _connection_id: &str) -> Result<()> {
        Err(GatewayError::Store("store unavailable".to_string()))
    }

    async fn scan(&self) -> Result<Vec<Connection>> {
        Err(GatewayError::Store("store unavailable".to_string()))
    }
}

pub(crate) fn connection_event(connection_id: &str) -> ConnectionEvent {
    ConnectionEvent {
        request_context: ConnectionContext {
            connection_id: connection_id.to_string(),
        },
    }
}

pub(crate) fn routed_event(connection_id: &str, body: Option<&str>) -> RoutedEvent {
    RoutedEvent {
        request_context: RequestContext {
            connection_id: connection_id.to_string(),
            domain_name: "api.example.com".to_string(),
            stage: "dev".to_string(),
        },
        body: body.map(str::to_string),
    }
}

pub(crate) fn http_event(
    method: &str,
    resource: &str,
    user_id: Option<&str>,
    body: Option<&str>,
) -> HttpRequestEvent {
    let mut path_parameters = HashMap::new();
    if let Some(user_id) = user_id {
        path_parameters.insert("userId".to_string(), user_id.to_string());
    }
    HttpRequestEvent {
        http_method: method.to_string(),
        resource: resource.to_string(),
        path_parameters,
        body: body.map(str::to_string),
    }
}
