//! 领域数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GatewayError, Result};

/// 记录主键字段名
pub const RECORD_ID_FIELD: &str = "userId";
/// 服务端时间戳字段名，create / replace 时覆盖写入
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// 已注册连接（连接表整行）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    /// 连接 ID（表主键）
    #[serde(rename = "connectionId")]
    pub connection_id: String,
}

impl Connection {
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
        }
    }
}

/// 用户记录：主键 userId 加任意调用方字段，存储形态就是一个 JSON 对象
pub type RecordItem = Map<String, Value>;

/// 取记录主键；不变量：每条入库记录都有非空的 userId
pub fn record_key(item: &RecordItem) -> Result<String> {
    match item.get(RECORD_ID_FIELD).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(GatewayError::InvalidRecord(format!(
            "missing non-empty {RECORD_ID_FIELD}"
        ))),
    }
}

/// 投递通道端点，按每个入站请求的 domain + stage 构造
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub domain_name: String,
    pub stage: String,
}

impl Endpoint {
    pub fn new(domain_name: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            stage: stage.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("https://{}/{}", self.domain_name, self.stage)
    }
}
