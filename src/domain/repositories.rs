//! 存储与投递通道抽象
//!
//! 两张键值表形状相同但语义独立；投递通道是面向单个连接的推送能力。

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::models::{Connection, Endpoint, RecordItem};
use crate::error::Result;

/// 连接注册表：connection_id -> Connection 的键值表
#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// 插入一条连接记录；主键已存在时整行覆盖（幂等）
    async fn insert(&self, connection: Connection) -> Result<()>;
    /// 按主键删除；主键不存在时也视为成功
    async fn remove(&self, connection_id: &str) -> Result<()>;
    /// 全表扫描
    async fn scan(&self) -> Result<Vec<Connection>>;
}

/// 用户记录表：userId -> RecordItem 的键值表
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 整行写入，主键取自 item 里的 userId 字段
    async fn put(&self, item: RecordItem) -> Result<()>;
    /// 按主键读取
    async fn get(&self, record_id: &str) -> Result<Option<RecordItem>>;
    /// 按主键删除；主键不存在时也视为成功
    async fn delete(&self, record_id: &str) -> Result<()>;
    /// 全表扫描
    async fn scan(&self) -> Result<Vec<RecordItem>>;
}

/// 面向单个连接的消息推送能力，端点按请求构造
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// 查询连接元数据
    async fn connection_info(&self, endpoint: &Endpoint, connection_id: &str) -> Result<Value>;
    /// 向指定连接推送一段文本负载
    async fn post_to_connection(
        &self,
        endpoint: &Endpoint,
        connection_id: &str,
        data: &str,
    ) -> Result<()>;
}
