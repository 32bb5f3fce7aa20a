//! ripple-chat 错误类型定义

use thiserror::Error;

/// 网关错误类型
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 存储操作失败（连接表或用户表）
    #[error("Store operation failed: {0}")]
    Store(String),

    /// 投递通道调用失败
    #[error("Delivery channel error: {0}")]
    Delivery(String),

    /// 事件缺少必要字段
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// 记录缺少非空主键
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 请求体 JSON 解析失败
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// 其他错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 网关结果类型
pub type Result<T> = std::result::Result<T, GatewayError>;
