use crate::application::ports::user_repository::RepositoryError;
use crate::domain::users::user::ValidationError;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// Failure of a command that validates before touching the store.
#[derive(thiserror::Error, Debug)]
pub enum UserCommandError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
