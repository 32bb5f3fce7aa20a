pub mod connection_store;
pub mod delivery;
pub mod record_store;

pub use connection_store::in_memory::InMemoryConnectionStore;
pub use connection_store::redis::RedisConnectionStore;
pub use delivery::http::HttpDeliveryChannel;
pub use record_store::in_memory::InMemoryRecordStore;
pub use record_store::redis::RedisRecordStore;
