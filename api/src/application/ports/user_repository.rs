use async_trait::async_trait;

use crate::domain::users::user::User;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("user not found with ID: {0}")]
    NotFound(i64),
    #[error("failed to {op}")]
    Storage {
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl RepositoryError {
    pub fn storage(op: &'static str, source: impl Into<anyhow::Error>) -> Self {
        RepositoryError::Storage {
            op,
            source: source.into(),
        }
    }
}

/// Persistence boundary for users. Lookups that find nothing return `Ok(None)`;
/// mutations of a missing row return `RepositoryError::NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and returns it with the store-assigned id.
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    async fn update(&self, user: &User) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
