//! 入站事件与出站响应的数据形态
//!
//! 字段名保持分发器的线格式（camelCase）。形状不合法的事件
//! 在反序列化阶段就会失败，由分发器处理，不进入各 handler。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::Endpoint;

/// `$connect` / `$disconnect` 事件的请求上下文，只带连接 ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionContext {
    #[serde(rename = "connectionId")]
    pub connection_id: String,
}

/// 连接建立 / 断开事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionEvent {
    #[serde(rename = "requestContext")]
    pub request_context: ConnectionContext,
}

/// 已路由应用事件的请求上下文，额外带构造端点所需的元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "connectionId")]
    pub connection_id: String,
    #[serde(rename = "domainName")]
    pub domain_name: String,
    pub stage: String,
}

/// 已路由应用事件（默认路由、sendmessage 路由）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutedEvent {
    #[serde(rename = "requestContext")]
    pub request_context: RequestContext,
    #[serde(default)]
    pub body: Option<String>,
}

impl RoutedEvent {
    /// 按请求元数据构造投递端点
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.request_context.domain_name, &self.request_context.stage)
    }
}

/// 请求-响应事件（CRUD 子系统）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRequestEvent {
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    pub resource: String,
    #[serde(rename = "pathParameters", default)]
    pub path_parameters: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// 广播子系统的出站响应，只有状态码
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WsResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl WsResponse {
    pub fn ok() -> Self {
        Self { status_code: 200 }
    }

    pub fn server_error() -> Self {
        Self { status_code: 500 }
    }
}

/// CRUD 子系统的出站响应：状态码 + JSON 正文 + 固定响应头
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    pub fn json(status_code: u16, body: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            status_code,
            body: body.to_string(),
            headers,
        }
    }
}
