pub mod models;
pub mod repositories;

pub use models::{Connection, Endpoint, RECORD_ID_FIELD, RecordItem, TIMESTAMP_FIELD, record_key};
pub use repositories::{ConnectionStore, DeliveryChannel, RecordStore};
