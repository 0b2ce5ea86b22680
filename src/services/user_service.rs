use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::database::{StoreError, UserStore};
use crate::models::{CreateUserRequest, User};
use crate::utils::AppError;

const STORE_NOT_CONFIGURED: &str = "User store is not configured";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Connected,
    Unavailable,
    NotConfigured,
}

/// User operations over an optional store. Without a store every operation
/// that needs persistence fails with `StoreUnavailable`.
#[derive(Clone)]
pub struct UserService {
    store: Option<Arc<dyn UserStore>>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn without_store() -> Self {
        Self { store: None }
    }

    fn store(&self) -> Result<&Arc<dyn UserStore>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::StoreUnavailable(STORE_NOT_CONFIGURED.to_string()))
    }

    /// Validates and persists a new user.
    ///
    /// The lookup before the insert gives a readable error for the common
    /// case; the store's unique index still decides concurrent inserts.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        let new_user = request.validate().map_err(AppError::Validation)?;
        let store = self.store()?;

        let existing = store
            .find_by_email(&new_user.email)
            .await
            .map_err(unavailable)?;
        if existing.is_some() {
            return Err(duplicate_email(&new_user.email));
        }

        let email = new_user.email.clone();
        match store.insert(new_user).await {
            Ok(user) => {
                log::info!("✅ User created: {} ({})", user.email, user.id);
                Ok(user)
            }
            Err(StoreError::Duplicate(_)) => Err(duplicate_email(&email)),
            Err(e) => Err(unavailable(e)),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store()?.list().await.map_err(unavailable)
    }

    pub async fn store_status(&self) -> StoreStatus {
        match &self.store {
            None => StoreStatus::NotConfigured,
            Some(store) => match store.ping().await {
                Ok(()) => StoreStatus::Connected,
                Err(e) => {
                    log::warn!("⚠️  User store ping failed: {}", e);
                    StoreStatus::Unavailable
                }
            },
        }
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("A user with email {} already exists", email))
}

fn unavailable(err: StoreError) -> AppError {
    log::error!("❌ User store error: {}", err);
    AppError::StoreUnavailable(err.to_string())
}
