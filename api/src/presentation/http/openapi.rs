use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "User API", description = "A simple REST API for managing users"),
    paths(
        crate::presentation::http::ping::ping,
        crate::presentation::http::users::create_user,
        crate::presentation::http::users::get_user,
        crate::presentation::http::users::update_user,
        crate::presentation::http::users::delete_user,
        crate::presentation::http::users::list_users,
    ),
    components(schemas(
        crate::presentation::http::ping::PingResponse,
        crate::presentation::http::users::User,
        crate::presentation::http::users::UserPayload,
        crate::presentation::http::error::ErrorResponse,
    )),
    tags(
        (name = "Users", description = "User management"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;
