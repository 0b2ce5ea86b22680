//! In-process `UserStore` used by the handler and service tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    offline: AtomicBool,
    lookup_blind: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail as if the server could not be reached
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Makes `find_by_email` miss, as when another request inserts the same
    /// email between the lookup and the insert
    pub fn set_lookup_blind(&self, blind: bool) {
        self.lookup_blind.store(blind, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or_default()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, StoreError> {
        self.users
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check_online()?;
        if self.lookup_blind.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.lock()?.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        self.check_online()?;
        let mut users = self.lock()?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(format!("email: {}", user.email)));
        }

        let created = User {
            id: ObjectId::new().to_hex(),
            name: user.name,
            email: user.email,
            age: user.age,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.check_online()?;
        Ok(self.lock()?.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_online()
    }
}
