use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::user_repository::RepositoryError;
use crate::application::use_cases::users::UserCommandError;
use crate::application::use_cases::users::create_user::CreateUser;
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::update_user::UpdateUser;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user as domain;
use crate::presentation::http::error::{ApiError, ErrorResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub phone_number: String,
    pub email: String,
}

impl From<domain::User> for User {
    fn from(u: domain::User) -> Self {
        User {
            id: u.id,
            name: u.name,
            age: u.age,
            phone_number: u.phone_number,
            email: u.email,
        }
    }
}

/// Request body for create and update. Missing or `null` fields decode to
/// empty/zero values and are rejected by validation; any `id` in the body is
/// ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<UserPayload> for domain::User {
    fn from(p: UserPayload) -> Self {
        domain::User {
            id: 0,
            name: p.name,
            age: p.age,
            phone_number: p.phone_number,
            email: p.email,
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|e| {
        tracing::debug!(raw_id = raw, error = %e, "invalid_user_id");
        ApiError::BadRequest("Invalid user ID".into())
    })
}

// Bodies are decoded by hand so every malformed payload maps to a JSON 400,
// independent of the request content type. Only the first JSON value is read;
// anything after it is ignored.
fn decode_payload(body: &[u8]) -> Result<UserPayload, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<UserPayload>()
        .next()
    {
        Some(res) => res,
        // Empty or whitespace-only body: let the plain decoder report EOF.
        None => serde_json::from_slice(body),
    }
}

#[utoipa::path(post, path = "/users", tag = "Users", request_body = UserPayload,
    responses(
        (status = 201, body = User),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = decode_payload(&body).map_err(|e| {
        tracing::debug!(error = %e, "user_payload_decode_failed");
        ApiError::BadRequest(format!("Invalid request payload: {e}"))
    })?;

    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    let user = uc.execute(payload.into()).await.map_err(|e| match e {
        UserCommandError::Invalid(v) => ApiError::BadRequest(v.to_string()),
        UserCommandError::Repository(e) => {
            tracing::error!(error = ?e, "user_create_failed");
            ApiError::Internal("Error creating user")
        }
    })?;

    tracing::info!(user_id = user.id, "user_created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(get, path = "/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, body = User),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(id)
        .await
        .map_err(|e| {
            tracing::error!(user_id = id, error = ?e, "user_fetch_failed");
            ApiError::Internal("Error retrieving user")
        })?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(user.into()))
}

#[utoipa::path(put, path = "/users/{id}", tag = "Users", request_body = UserPayload,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, body = User),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn update_user(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let payload = decode_payload(&body).map_err(|e| {
        tracing::debug!(user_id = id, error = %e, "user_payload_decode_failed");
        ApiError::BadRequest("Invalid request payload".into())
    })?;

    let repo = ctx.user_repo();
    let uc = UpdateUser {
        repo: repo.as_ref(),
    };
    let user = uc.execute(id, payload.into()).await.map_err(|e| match e {
        UserCommandError::Invalid(v) => ApiError::BadRequest(v.to_string()),
        UserCommandError::Repository(RepositoryError::NotFound(_)) => {
            ApiError::NotFound("User not found")
        }
        UserCommandError::Repository(e) => {
            tracing::error!(user_id = id, error = ?e, "user_update_failed");
            ApiError::Internal("Error updating user")
        }
    })?;

    tracing::info!(user_id = id, "user_updated");
    Ok(Json(user.into()))
}

#[utoipa::path(delete, path = "/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    uc.execute(id).await.map_err(|e| match e {
        RepositoryError::NotFound(_) => ApiError::NotFound("User not found"),
        e => {
            tracing::error!(user_id = id, error = ?e, "user_delete_failed");
            ApiError::Internal("Error deleting user")
        }
    })?;

    tracing::info!(user_id = id, "user_deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/users", tag = "Users",
    responses(
        (status = 200, body = [User]),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn list_users(State(ctx): State<AppContext>) -> Result<Json<Vec<User>>, ApiError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute().await.map_err(|e| {
        tracing::error!(error = ?e, "user_list_failed");
        ApiError::Internal("Error retrieving users")
    })?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(ctx)
}
