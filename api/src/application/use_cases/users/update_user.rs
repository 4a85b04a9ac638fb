use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserCommandError;
use crate::domain::users::user::User;

pub struct UpdateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateUser<'a, R> {
    // The path id always wins over whatever id the payload carried.
    pub async fn execute(&self, id: i64, user: User) -> Result<User, UserCommandError> {
        let user = User { id, ..user };
        user.validate()?;
        self.repo.update(&user).await?;
        Ok(user)
    }
}
