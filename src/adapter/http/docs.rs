use axum::{Json, response::Html};
use utoipa::{OpenApi, openapi::OpenApi as OpenApiDoc};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::user,
    schema::{
        message::MessageResponse,
        pagination::UserPageResponse,
        user::{CreateUserRequest, GetUserResponse, ProfileResponse, UpdateUserRequest},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::get_all_users,
        user::paginate_users,
        user::get_user,
        user::update_user,
        user::delete_user
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            CreateUserRequest,
            UpdateUserRequest,
            GetUserResponse,
            ProfileResponse,
            UserPageResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
