// Adapters layer: concrete implementations of the domain ports (http
// transport, notification sinks).

pub mod http;
pub mod notify;
