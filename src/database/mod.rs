pub mod mongo;
#[cfg(test)]
pub mod memory;

pub use mongo::MongoDB;

use async_trait::async_trait;
use std::fmt;

use crate::models::{NewUser, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique index rejected the write
    Duplicate(String),
    /// Connection, timeout or query failure
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Duplicate(msg) => write!(f, "Duplicate key: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence for user records.
///
/// Implementations must reject a second user with an email that is already
/// stored by returning `StoreError::Duplicate` from `insert`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persists the user and returns it with its assigned id.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// All users, in the store's natural order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
