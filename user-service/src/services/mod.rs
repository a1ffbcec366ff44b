pub mod user_service;

pub use user_service::{parse_record_id, UserService};
