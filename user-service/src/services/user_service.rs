use crate::models::{User, UserFields};
use tracing::debug;

/// Resolve a caller-supplied identifier.
///
/// Only canonical, strictly positive decimal integers are accepted: "42" is
/// valid while "042", "+42", "42abc", "4.5", "-1" and "0" are not. Anything
/// rejected here is reported the same way as an id that names no record.
pub fn parse_record_id(raw: &str) -> Option<u64> {
    let id = raw.parse::<u64>().ok()?;
    if id == 0 || id.to_string() != raw {
        return None;
    }
    Some(id)
}

/// Ordered in-memory collection of user records.
///
/// Records keep their insertion order. Identifiers come from a counter that
/// only moves forward, so a deleted id is never handed out again.
#[derive(Debug)]
pub struct UserService {
    users: Vec<User>,
    next_id: u64,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Start from pre-existing records. The counter starts above the highest
    /// seeded id; records with a zero or repeated id are skipped.
    pub fn with_records(records: impl IntoIterator<Item = User>) -> Self {
        let mut users: Vec<User> = Vec::new();
        for record in records {
            if record.id == 0 || users.iter().any(|u| u.id == record.id) {
                debug!(id = record.id, "skipping seed record with unusable id");
                continue;
            }
            users.push(record);
        }

        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        Self { users, next_id }
    }

    /// Append a new record built from validated creation fields.
    ///
    /// `fields` must carry `nome` and `email`; the validator guarantees it.
    /// Missing values are stored as empty strings rather than rejected.
    pub fn create(&mut self, fields: UserFields) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let mut user = User::new(id, String::new(), String::new());
        user.merge(fields);
        debug!(id, "created user record");

        self.users.push(user.clone());
        user
    }

    /// Current size and every record in insertion order.
    pub fn list(&self) -> (usize, &[User]) {
        (self.users.len(), &self.users)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Merge `fields` into the record with this id, keeping its position.
    pub fn update(&mut self, id: u64, fields: UserFields) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.merge(fields);
        debug!(id, "updated user record");
        Some(user.clone())
    }

    /// Remove the record with this id. Returns false when there is none.
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            return false;
        };
        self.users.remove(index);
        debug!(id, "deleted user record");
        true
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
