pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;

pub use api::{app, RpcServer, SharedHandler};
pub use config::ServerConfig;
pub use error::{ErrorBody, RpcError, RpcResult};
pub use handlers::{UserHandler, UserList};

// Re-export types needed by clients
pub use user_service;
