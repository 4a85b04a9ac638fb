#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use tower::ServiceExt;

use user_api::application::ports::user_repository::{RepositoryError, UserRepository};
use user_api::bootstrap::app_context::{AppContext, AppServices};
use user_api::bootstrap::config::Config;
use user_api::domain::users::user::User;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let mut t = self.table.lock().unwrap();
        t.next_id += 1;
        let stored = User {
            id: t.next_id,
            ..user.clone()
        };
        t.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut t = self.table.lock().unwrap();
        match t.rows.get_mut(&user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(user.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        match self.table.lock().unwrap().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }
}

/// Every operation fails the way a lost database connection would.
pub struct FailingUserRepository;

fn unavailable(op: &'static str) -> RepositoryError {
    RepositoryError::storage(op, anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: &User) -> Result<User, RepositoryError> {
        Err(unavailable("create user"))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<User>, RepositoryError> {
        Err(unavailable("fetch user"))
    }

    async fn update(&self, _user: &User) -> Result<(), RepositoryError> {
        Err(unavailable("update user"))
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(unavailable("delete user"))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Err(unavailable("fetch users"))
    }
}

/// Answers reads only after `delay`; writes behave like the in-memory store.
pub struct SlowUserRepository {
    pub delay: Duration,
    pub inner: InMemoryUserRepository,
}

#[async_trait]
impl UserRepository for SlowUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        self.inner.create(user).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_by_id(id).await
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        self.inner.update(user).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.inner.delete(id).await
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list().await
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn app_with(repo: Arc<dyn UserRepository>, cfg: Config) -> Router {
    let ctx = AppContext::new(cfg, AppServices::new(repo));
    user_api::presentation::http::router(ctx)
}

pub fn app() -> Router {
    app_with(Arc::new(InMemoryUserRepository::default()), test_config())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

pub const JOHN: &str =
    r#"{"name":"John Doe","age":30,"phone_number":"+1234567890","email":"john@example.com"}"#;
