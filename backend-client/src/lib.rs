//! Typed client for the dashboard API plus the linked-event resolver: the
//! two-step lookup that turns a breadcrumb's event id into the short-id
//! badge for the issue it belongs to, backed by a session-scoped cache
//! that is evicted when the user leaves the route.

mod client;
mod error;
mod linked_event;
mod session_cache;

pub use client::ClientConfig;
pub use client::HttpBackendClient;
pub use client::LinkedEventApi;
pub use error::BackendError;
pub use linked_event::LinkedEventResolver;
pub use linked_event::LinkedEventState;
pub use linked_event::Notifier;
pub use linked_event::RenderHint;
pub use session_cache::RouteId;
pub use session_cache::SessionCache;
