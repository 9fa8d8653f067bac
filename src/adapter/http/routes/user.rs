use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        schema::{
            message::MessageResponse,
            pagination::{PaginationQuery, UserPageResponse},
            user::{CreateUserRequest, GetUserResponse, ProfileResponse, UpdateUserRequest},
        },
        validation::ValidJson,
    },
    application::{
        app_error::AppResult,
        dto::{
            id::IdDTO,
            user::{CreateUserDTO, GetUserPageDTO, UpdateUserDTO, UserDTO},
        },
        interactors::users::{
            CreateUserInteractor, DeleteUserInteractor, GetUserInteractor, GetUserPageInteractor,
            ListUsersInteractor, UpdateUserInteractor,
        },
    },
};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
#[allow(unused_imports)]
use serde_json::json;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

fn user_response(user: UserDTO) -> GetUserResponse {
    GetUserResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
        profile: user.profile.map(|profile| ProfileResponse {
            id: profile.id,
            name: profile.name,
            status: profile.status,
            bio: profile.bio,
        }),
    }
}

#[utoipa::path(
    post,
    path = "/api/users/create",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User and profile created",
            body = GetUserResponse
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({ "error": "Name must be between 1 and 100 characters" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn create_user(
    interactor: CreateUserInteractor,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        email: payload.email.to_string(),
        name: payload.name,
        status: payload.status,
        bio: payload.bio,
    };
    let created = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(user_response(created))))
}

#[utoipa::path(
    get,
    path = "/api/users/all",
    tag = "Users",
    responses(
        (
            status = 200,
            description = "All users, newest first",
            body = Vec<GetUserResponse>
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn get_all_users(interactor: ListUsersInteractor) -> AppResult<impl IntoResponse> {
    let users = interactor.execute().await?;
    let response: Vec<GetUserResponse> = users.into_iter().map(user_response).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/users/paginate",
    tag = "Users",
    params(PaginationQuery),
    responses(
        (
            status = 200,
            description = "One page of users plus totals",
            body = UserPageResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn paginate_users(
    interactor: GetUserPageInteractor,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let dto = GetUserPageDTO {
        page: query.page.unwrap_or(DEFAULT_PAGE),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let result = interactor.execute(dto).await?;

    Ok((
        StatusCode::OK,
        Json(UserPageResponse {
            users: result.users.into_iter().map(user_response).collect(),
            total: result.total,
            page: result.page,
            total_pages: result.total_pages,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User with profile", body = GetUserResponse),
        (
            status = 404,
            description = "User not found",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn get_user(
    interactor: GetUserInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(user_response(user))))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = GetUserResponse),
        (
            status = 404,
            description = "User not found",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn update_user(
    interactor: UpdateUserInteractor,
    Path(user_id): Path<String>,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateUserDTO {
        id: user_id,
        email: payload.email.map(|email| email.to_string()),
        name: payload.name,
        status: payload.status,
        bio: payload.bio,
    };
    let updated = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(user_response(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (
            status = 200,
            description = "User deleted",
            body = MessageResponse,
            example = json!({ "message": "User Deleted Successfully!" })
        ),
        (
            status = 404,
            description = "User not found",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn delete_user(
    interactor: DeleteUserInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    interactor.execute(IdDTO { id: user_id }).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "User Deleted Successfully!".to_string(),
        }),
    ))
}
