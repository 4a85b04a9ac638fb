use async_trait::async_trait;

use crate::application::ports::user_repository::{RepositoryError, UserRepository};
use crate::domain::users::user::User;
use crate::infrastructure::db::PgPool;

#[derive(sqlx::FromRow)]
struct UserRecord {
    id: i64,
    name: String,
    age: i32,
    phone_number: String,
    email: String,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        User {
            id: r.id,
            name: r.name,
            age: r.age,
            phone_number: r.phone_number,
            email: r.email,
        }
    }
}

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO users (name, age, phone_number, email) VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.phone_number)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage("create user", e))?;
        tracing::debug!(user_id = id, "user_inserted");
        Ok(User {
            id,
            ..user.clone()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, age, phone_number, email FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage("fetch user", e))?;
        if row.is_none() {
            tracing::debug!(user_id = id, "user_not_found");
        }
        Ok(row.map(Into::into))
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let res = sqlx::query(
            r#"UPDATE users SET name = $1, age = $2, phone_number = $3, email = $4
               WHERE id = $5"#,
        )
        .bind(&user.name)
        .bind(user.age)
        .bind(&user.phone_number)
        .bind(&user.email)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage("update user", e))?;
        // Postgres counts matched rows, so rewriting identical values still reports 1.
        if res.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(user.id));
        }
        tracing::debug!(user_id = user.id, "user_row_updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::storage("delete user", e))?;
        if res.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        tracing::debug!(user_id = id, "user_row_deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, age, phone_number, email FROM users"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage("fetch users", e))?;
        tracing::debug!(count = rows.len(), "users_listed");
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
