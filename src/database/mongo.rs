use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User, UserDocument};

pub const USERS_COLLECTION: &str = "users";
pub const DEFAULT_DATABASE: &str = "userdb";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the client without touching the network. The driver connects
    /// lazily and reconnects on its own, so a server that is down at startup
    /// only fails the requests that need it.
    pub async fn new(uri: &str, database: Option<&str>) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        // Fail fast when the server is unreachable
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Explicit name, then the one in the URI path, then the default
        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        Ok(Self { db })
    }

    /// Creates the unique index that enforces one user per email
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        log::info!("🔧 Creating database indexes...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection::<Document>(USERS_COLLECTION)
            .create_index(email_index)
            .await?;

        log::info!("   ✅ Index ready: users(email) unique");
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn users(&self) -> Collection<UserDocument> {
        self.collection(USERS_COLLECTION)
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                StoreError::Duplicate(write_error.message.clone())
            }
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl UserStore for MongoDB {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let found = self.users().find_one(doc! { "email": email }).await?;
        Ok(found.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut document = user.into_document();
        let result = self.users().insert_one(&document).await?;

        match result.inserted_id {
            Bson::ObjectId(id) => document.id = Some(id),
            other => {
                return Err(StoreError::Unavailable(format!(
                    "unexpected inserted id: {}",
                    other
                )))
            }
        }

        Ok(User::from(document))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users().find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
