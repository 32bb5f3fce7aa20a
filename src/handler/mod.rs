//! 路由处理器
//!
//! 每个处理器对应一条路由，由外部分发器按事件调用一次，
//! 处理器之间不共享进程内状态，只通过存储与投递通道交互。

pub mod connect;
pub mod default_route;
pub mod disconnect;
pub mod send_message;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use connect::ConnectHandler;
pub use default_route::DefaultHandler;
pub use disconnect::DisconnectHandler;
pub use send_message::SendMessageHandler;
pub use users::UsersCrudHandler;
