//! ripple-chat 核心库
//!
//! 最小实时消息后端：客户端通过持久双向通道接入，注册连接，
//! 并向其余所有在线连接广播短文本消息（注册 → 默认回显 → 广播扇出）。
//! 另带一个互相独立的用户记录 CRUD 子系统。
//!
//! 事件分发与传输层由宿主环境提供；本库只实现各路由处理器
//! 及其依赖的存储与投递通道抽象：
//!
//! 1. **连接注册**：`$connect` / `$disconnect` 路由，读写连接表
//! 2. **默认回显**：未匹配路由时向发送者回推用法提示
//! 3. **广播扇出**：`sendmessage` 路由，尽力而为、至多一次、不保证顺序
//! 4. **用户记录 CRUD**：请求-响应式五路分发

pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod infrastructure;
pub mod interface;
pub mod service;

pub use config::AppConfig;
pub use error::{GatewayError, Result};
