/// Live view of the store over WebSocket: a summary frame on connect and after
/// every dispatch.
pub mod handler;
pub mod message;
