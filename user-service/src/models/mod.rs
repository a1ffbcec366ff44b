pub mod user;

pub use user::{Payload, User, UserFields};
