pub mod events;

pub use events::{
    ConnectionContext, ConnectionEvent, HttpRequestEvent, HttpResponse, RequestContext,
    RoutedEvent, WsResponse,
};
