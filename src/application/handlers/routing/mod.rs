//! Routing handlers.

mod route_message;

pub use route_message::RouteMessageHandler;
