use crate::error::{RpcError, RpcResult};
use serde::Serialize;
use tracing::debug;
use user_service::{parse_record_id, Payload, ServiceError, User, UserService, UserValidator};

/// Listing response: `{count, data}`
#[derive(Debug, Clone, Serialize)]
pub struct UserList {
    pub count: usize,
    pub data: Vec<User>,
}

/// Request-level orchestration over the user store.
///
/// Every operation that takes an identifier resolves it before looking at the
/// payload, so a bad id wins over a bad body.
pub struct UserHandler {
    service: UserService,
}

impl UserHandler {
    pub fn new() -> Self {
        Self {
            service: UserService::new(),
        }
    }

    pub fn with_service(service: UserService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &UserService {
        &self.service
    }

    pub fn create_user(&mut self, payload: RpcResult<Payload>) -> RpcResult<User> {
        let fields = UserValidator::check_create(payload?).inspect_err(log_rejection)?;
        Ok(self.service.create(fields))
    }

    pub fn list_users(&self) -> UserList {
        let (count, users) = self.service.list();
        UserList {
            count,
            data: users.to_vec(),
        }
    }

    pub fn get_user(&self, raw_id: &str) -> RpcResult<User> {
        let id = self.resolve(raw_id)?;
        self.service
            .find_by_id(id)
            .cloned()
            .ok_or(RpcError::NotFound)
    }

    pub fn update_user(&mut self, raw_id: &str, payload: RpcResult<Payload>) -> RpcResult<User> {
        let id = self.resolve(raw_id)?;
        let fields = UserValidator::check_update(payload?).inspect_err(log_rejection)?;
        self.service.update(id, fields).ok_or(RpcError::NotFound)
    }

    pub fn delete_user(&mut self, raw_id: &str) -> RpcResult<()> {
        let id = self.resolve(raw_id)?;
        if self.service.delete(id) {
            Ok(())
        } else {
            Err(RpcError::NotFound)
        }
    }

    /// Map a raw path segment to the id of an existing record.
    fn resolve(&self, raw_id: &str) -> RpcResult<u64> {
        match parse_record_id(raw_id) {
            Some(id) if self.service.contains(id) => Ok(id),
            _ => {
                debug!(raw_id, "identifier does not resolve to a record");
                Err(ServiceError::NotFound.into())
            }
        }
    }
}

impl Default for UserHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn log_rejection(err: &ServiceError) {
    debug!(errors = ?err.details(), "payload rejected");
}
