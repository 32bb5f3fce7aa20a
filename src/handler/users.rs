//! 用户记录 CRUD 处理器
//!
//! 按 `"{method} {resource}"` 做五路分发。各分支是互相独立的
//! 相等性检查而非互斥匹配，保持路由判定的原有优先顺序；
//! 分支内任何错误在顶层统一兜住，以 400 加错误文本返回。

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Value, json};
use tracing::warn;
use uuid::Uuid;

use crate::domain::models::{RECORD_ID_FIELD, RecordItem, TIMESTAMP_FIELD};
use crate::domain::repositories::RecordStore;
use crate::error::{GatewayError, Result};
use crate::interface::events::{HttpRequestEvent, HttpResponse};

const ROUTE_LIST: &str = "GET /users";
const ROUTE_FETCH: &str = "GET /user/{userId}";
const ROUTE_DELETE: &str = "DELETE /users/{userId}";
const ROUTE_CREATE: &str = "POST /users";
const ROUTE_REPLACE: &str = "PUT /users/{userId}";

pub struct UsersCrudHandler {
    records: Arc<dyn RecordStore>,
}

impl UsersCrudHandler {
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }

    pub async fn handle(&self, event: &HttpRequestEvent) -> HttpResponse {
        let route_key = format!("{} {}", event.http_method, event.resource);

        // 默认响应：没有分支命中时返回不支持的路由
        let mut response_body = json!({"Message": "Unsupported route"});
        let mut status_code = 400;

        if let Err(err) = self
            .dispatch(event, &route_key, &mut response_body, &mut status_code)
            .await
        {
            warn!(error = %err, route_key = %route_key, "users request failed");
            status_code = 400;
            response_body = json!({"Error": err.to_string()});
        }

        HttpResponse::json(status_code, &response_body)
    }

    async fn dispatch(
        &self,
        event: &HttpRequestEvent,
        route_key: &str,
        response_body: &mut Value,
        status_code: &mut u16,
    ) -> Result<()> {
        if route_key == ROUTE_LIST {
            let items = self.records.scan().await?;
            *response_body = Value::Array(items.into_iter().map(Value::Object).collect());
            *status_code = 200;
        }

        if route_key == ROUTE_FETCH {
            let user_id = Self::path_param(event)?;
            *response_body = match self.records.get(user_id).await? {
                Some(item) => Value::Object(item),
                // 未命中与命中但为空不作区分
                None => json!({}),
            };
            *status_code = 200;
        }

        if route_key == ROUTE_DELETE {
            let user_id = Self::path_param(event)?;
            self.records.delete(user_id).await?;
            *response_body = json!({});
            *status_code = 200;
        }

        if route_key == ROUTE_CREATE {
            let mut item = Self::parse_body(event)?;
            Self::stamp(&mut item);
            if !item.contains_key(RECORD_ID_FIELD) {
                item.insert(
                    RECORD_ID_FIELD.to_string(),
                    json!(Uuid::new_v4().to_string()),
                );
            }
            self.records.put(item.clone()).await?;
            *response_body = Value::Object(item);
            *status_code = 200;
        }

        if route_key == ROUTE_REPLACE {
            let user_id = Self::path_param(event)?.to_string();
            let mut item = Self::parse_body(event)?;
            Self::stamp(&mut item);
            // 路径参数优先于请求体里的 userId
            item.insert(RECORD_ID_FIELD.to_string(), json!(user_id));
            self.records.put(item.clone()).await?;
            *response_body = Value::Object(item);
            *status_code = 200;
        }

        Ok(())
    }

    fn path_param(event: &HttpRequestEvent) -> Result<&str> {
        event
            .path_parameters
            .get("userId")
            .map(String::as_str)
            .ok_or_else(|| GatewayError::InvalidEvent("missing path parameter userId".to_string()))
    }

    fn parse_body(event: &HttpRequestEvent) -> Result<RecordItem> {
        let body = event
            .body
            .as_deref()
            .ok_or_else(|| GatewayError::InvalidEvent("missing request body".to_string()))?;
        Ok(serde_json::from_str(body)?)
    }

    fn stamp(item: &mut RecordItem) {
        item.insert(TIMESTAMP_FIELD.to_string(), json!(Utc::now().to_rfc3339()));
    }
}
