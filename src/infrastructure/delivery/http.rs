//! 基于 HTTP 管理接口的投递通道实现
//!
//! 端点按每个入站请求构造（`https://{domain}/{stage}`），
//! 连接级操作走 `{endpoint}/@connections/{connection_id}`。
//! 调用不设超时、不重试，慢依赖由调用方的调用期限兜底。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::models::Endpoint;
use crate::domain::repositories::DeliveryChannel;
use crate::error::{GatewayError, Result};

#[derive(Clone)]
pub struct HttpDeliveryChannel {
    client: Client,
}

impl HttpDeliveryChannel {
    pub fn new() -> Result<Self> {
        let client = Client::builder().use_rustls_tls().build().map_err(|err| {
            GatewayError::Configuration(format!("failed to build http client: {err}"))
        })?;
        Ok(Self { client })
    }

    fn connection_url(endpoint: &Endpoint, connection_id: &str) -> String {
        format!("{}/@connections/{}", endpoint.url(), connection_id)
    }
}

#[async_trait]
impl DeliveryChannel for HttpDeliveryChannel {
    async fn connection_info(&self, endpoint: &Endpoint, connection_id: &str) -> Result<Value> {
        let url = Self::connection_url(endpoint, connection_id);
        let response = self.client.get(&url).send().await.map_err(|err| {
            GatewayError::Delivery(format!("connection info request failed: {err}"))
        })?;

        if !response.status().is_success() {
            return Err(GatewayError::Delivery(format!(
                "connection info request returned {}",
                response.status()
            )));
        }

        response.json::<Value>().await.map_err(|err| {
            GatewayError::Delivery(format!("invalid connection info payload: {err}"))
        })
    }

    async fn post_to_connection(
        &self,
        endpoint: &Endpoint,
        connection_id: &str,
        data: &str,
    ) -> Result<()> {
        let url = Self::connection_url(endpoint, connection_id);
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(data.to_string())
            .send()
            .await
            .map_err(|err| GatewayError::Delivery(format!("push request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(GatewayError::Delivery(format!(
                "push request returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
