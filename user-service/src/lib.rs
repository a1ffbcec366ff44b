// User Service Library
// Record model, payload validation and the in-memory user store

pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};
pub use models::{Payload, User, UserFields};
pub use services::{parse_record_id, UserService};
pub use validation::{is_valid_email, UserValidator, ValidationError};
