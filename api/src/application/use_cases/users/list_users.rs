use crate::application::ports::user_repository::{RepositoryError, UserRepository};
use crate::domain::users::user::User;

pub struct ListUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ListUsers<'a, R> {
    pub async fn execute(&self) -> Result<Vec<User>, RepositoryError> {
        self.repo.list().await
    }
}
