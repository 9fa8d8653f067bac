use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_email::Email;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "ada@example.com",
    "name": "Ada Lovelace",
    "status": true,
    "bio": "Analyst, metaphysician, and founder of scientific computing"
}))]
pub struct CreateUserRequest {
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: Email,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = true)]
    pub status: Option<bool>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(value_type = Option<String>)]
    pub email: Option<Email>,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    pub status: Option<bool>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf14")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = true)]
    pub status: bool,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetUserResponse {
    #[schema(example = "019c47ec-183d-744e-b11d-cd409015bf13")]
    pub id: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<ProfileResponse>,
}
