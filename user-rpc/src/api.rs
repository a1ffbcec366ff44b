use crate::config::ServerConfig;
use crate::docs::openapi_document;
use crate::error::{RpcError, RpcResult};
use crate::handlers::{UserHandler, UserList};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use user_service::{seed, Payload, User, UserService};

pub const USERS_PATH: &str = "/api/v1/users";
pub const DOCS_PATH: &str = "/api/v1/docs";
pub const REMOVED_MESSAGE: &str = "record removed";

/// Handler shared by all requests. The lock serializes mutations so each
/// request runs to completion against the collection before the next one.
pub type SharedHandler = Arc<Mutex<UserHandler>>;

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Build the application without binding a socket.
pub fn app(handler: SharedHandler) -> Router {
    Router::new()
        .route(USERS_PATH, get(list_users).post(create_user))
        .route(
            &format!("{USERS_PATH}/:id"),
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(DOCS_PATH, get(docs))
        .fallback(unknown_route)
        .with_state(handler)
}

pub struct RpcServer {
    config: ServerConfig,
    user_handler: SharedHandler,
}

impl RpcServer {
    pub fn new(config: ServerConfig) -> Self {
        let service = if config.seed {
            UserService::with_records(seed::default_users())
        } else {
            UserService::new()
        };

        Self {
            config,
            user_handler: Arc::new(Mutex::new(UserHandler::with_service(service))),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn user_handler(&self) -> SharedHandler {
        Arc::clone(&self.user_handler)
    }

    pub fn router(&self) -> Router {
        app(self.user_handler())
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> std::io::Result<()> {
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let local = listener.local_addr()?;

        info!(%local, "users API listening");
        info!("docs: http://{local}{DOCS_PATH}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

impl Default for RpcServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Accept only a well-formed JSON object as a request body.
fn payload_from(body: Result<Json<Value>, JsonRejection>) -> RpcResult<Payload> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(RpcError::MalformedBody(
            "request body must be a JSON object".to_string(),
        )),
        Err(rejection) => Err(RpcError::MalformedBody(rejection.body_text())),
    }
}

/// A path segment that is not valid UTF-8 is just another malformed id.
fn path_id(path: Result<Path<String>, PathRejection>) -> RpcResult<String> {
    path.map(|Path(id)| id).map_err(|_| RpcError::NotFound)
}

async fn create_user(
    State(handler): State<SharedHandler>,
    body: Result<Json<Value>, JsonRejection>,
) -> RpcResult<(StatusCode, Json<User>)> {
    let user = handler.lock().await.create_user(payload_from(body))?;
    info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(handler): State<SharedHandler>) -> Json<UserList> {
    Json(handler.lock().await.list_users())
}

async fn get_user(
    State(handler): State<SharedHandler>,
    path: Result<Path<String>, PathRejection>,
) -> RpcResult<Json<User>> {
    let id = path_id(path)?;
    Ok(Json(handler.lock().await.get_user(&id)?))
}

async fn update_user(
    State(handler): State<SharedHandler>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> RpcResult<Json<User>> {
    let id = path_id(path)?;
    let user = handler.lock().await.update_user(&id, payload_from(body))?;
    info!(id = user.id, "user updated");
    Ok(Json(user))
}

async fn delete_user(
    State(handler): State<SharedHandler>,
    path: Result<Path<String>, PathRejection>,
) -> RpcResult<Json<MessageBody>> {
    let id = path_id(path)?;
    handler.lock().await.delete_user(&id)?;
    info!(%id, "user removed");
    Ok(Json(MessageBody {
        message: REMOVED_MESSAGE.to_string(),
    }))
}

async fn docs() -> Json<Value> {
    Json(openapi_document())
}

async fn unknown_route() -> RpcError {
    RpcError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_seeds_by_default() {
        let server = RpcServer::default();
        let handler = server.user_handler();
        let handler = handler.lock().await;

        assert_eq!(handler.list_users().count, 5);
        assert_eq!(handler.service().next_id(), 6);
    }

    #[tokio::test]
    async fn test_server_without_seed_starts_empty() {
        let server = RpcServer::new(ServerConfig {
            seed: false,
            ..ServerConfig::default()
        });
        assert_eq!(server.user_handler().lock().await.list_users().count, 0);
    }

    #[test]
    fn test_payload_must_be_object() {
        let err = payload_from(Ok(Json(serde_json::json!([1, 2])))).unwrap_err();
        assert!(matches!(err, RpcError::MalformedBody(_)));

        let map = payload_from(Ok(Json(serde_json::json!({ "nome": "Ana" })))).unwrap();
        assert_eq!(map.len(), 1);
    }
}
