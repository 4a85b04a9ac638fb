use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserCommandError;
use crate::domain::users::user::User;

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, user: User) -> Result<User, UserCommandError> {
        user.validate()?;
        let created = self.repo.create(&user).await?;
        Ok(created)
    }
}
