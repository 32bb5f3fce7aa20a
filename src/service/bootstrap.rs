//! 应用启动器 - 负责依赖注入和处理器装配
//!
//! 存储客户端在进程启动时构造一次，注入各处理器，
//! 处理器本身无状态，调用期间不再重建任何客户端。

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::repositories::{ConnectionStore, DeliveryChannel, RecordStore};
use crate::error::{GatewayError, Result};
use crate::handler::{
    ConnectHandler, DefaultHandler, DisconnectHandler, SendMessageHandler, UsersCrudHandler,
};
use crate::infrastructure::{
    HttpDeliveryChannel, InMemoryConnectionStore, InMemoryRecordStore, RedisConnectionStore,
    RedisRecordStore,
};

/// 应用上下文 - 持有全部已装配的处理器，供宿主分发器调用
pub struct ApplicationContext {
    pub connect_handler: Arc<ConnectHandler>,
    pub disconnect_handler: Arc<DisconnectHandler>,
    pub default_handler: Arc<DefaultHandler>,
    pub send_message_handler: Arc<SendMessageHandler>,
    pub users_handler: Arc<UsersCrudHandler>,
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext").finish_non_exhaustive()
    }
}

/// 应用启动器
pub struct ApplicationBootstrap;

impl ApplicationBootstrap {
    pub async fn create_context(config: &AppConfig) -> Result<ApplicationContext> {
        let connections = Self::build_connection_store(config);
        let records = Self::build_record_store(config)?;
        let delivery: Arc<dyn DeliveryChannel> = Arc::new(HttpDeliveryChannel::new()?);

        let connect_handler = Arc::new(ConnectHandler::new(connections.clone()));
        let disconnect_handler = Arc::new(DisconnectHandler::new(connections.clone()));
        let default_handler = Arc::new(DefaultHandler::new(delivery.clone()));
        let send_message_handler =
            Arc::new(SendMessageHandler::new(connections.clone(), delivery.clone()));
        let users_handler = Arc::new(UsersCrudHandler::new(records));

        info!(table = %config.table_name, "application context initialized");

        Ok(ApplicationContext {
            connect_handler,
            disconnect_handler,
            default_handler,
            send_message_handler,
            users_handler,
        })
    }

    /// 构建连接表：配置了 Redis 就用 Redis，初始化失败回退内存表
    fn build_connection_store(config: &AppConfig) -> Arc<dyn ConnectionStore> {
        if let Some(redis_url) = &config.connections_redis_url {
            match redis::Client::open(redis_url.as_str()) {
                Ok(client) => {
                    return Arc::new(RedisConnectionStore::new(
                        Arc::new(client),
                        config.table_name.clone(),
                    ));
                }
                Err(err) => warn!(
                    ?err,
                    %redis_url,
                    "failed to initialize redis connection store, falling back to memory"
                ),
            }
        }
        Arc::new(InMemoryConnectionStore::new())
    }

    /// 构建用户记录表；USERS_TABLE 缺失在这里才报错
    fn build_record_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>> {
        let users_table = config
            .users_table
            .as_deref()
            .ok_or_else(|| GatewayError::Configuration("USERS_TABLE is not set".to_string()))?;

        if let Some(redis_url) = &config.users_redis_url {
            match redis::Client::open(redis_url.as_str()) {
                Ok(client) => {
                    return Ok(Arc::new(RedisRecordStore::new(
                        Arc::new(client),
                        users_table.to_string(),
                    )));
                }
                Err(err) => warn!(
                    ?err,
                    %redis_url,
                    "failed to initialize redis record store, falling back to memory"
                ),
            }
        }
        Ok(Arc::new(InMemoryRecordStore::new()))
    }
}
