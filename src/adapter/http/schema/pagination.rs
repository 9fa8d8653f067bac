use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::adapter::http::schema::user::GetUserResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    #[param(minimum = 1, default = 1)]
    pub page: Option<i64>,
    #[param(minimum = 1, default = 10)]
    pub limit: Option<i64>,
}

// `totalPages` is part of the published wire format, hence the casing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPageResponse {
    pub users: Vec<GetUserResponse>,
    #[schema(example = 42)]
    pub total: i64,
    #[schema(example = 1)]
    pub page: i64,
    #[schema(example = 5)]
    pub total_pages: i64,
}
