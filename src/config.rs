//! 环境变量配置加载
//!
//! 表名与存储地址全部来自进程环境，进程启动时读取一次。

use std::env;

use crate::error::{GatewayError, Result};

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 连接表名（`TABLE_NAME`，必填）
    pub table_name: String,
    /// 用户表名（`USERS_TABLE`）；加载阶段不校验，
    /// 缺失时在记录存储初始化时才报错
    pub users_table: Option<String>,
    /// 连接表 Redis 地址（`CONNECTIONS_REDIS_URL`），缺省回退到内存表
    pub connections_redis_url: Option<String>,
    /// 用户表 Redis 地址（`USERS_REDIS_URL`），缺省回退到内存表
    pub users_redis_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let table_name = env::var("TABLE_NAME")
            .map_err(|_| GatewayError::Configuration("TABLE_NAME is not set".to_string()))?;

        let users_table = env::var("USERS_TABLE").ok();
        let connections_redis_url = env::var("CONNECTIONS_REDIS_URL").ok();
        let users_redis_url = env::var("USERS_REDIS_URL").ok();

        Ok(Self {
            table_name,
            users_table,
            connections_redis_url,
            users_redis_url,
        })
    }
}
