use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct CreateUserDTO {
    pub email: String,
    pub name: String,
    pub status: Option<bool>,
    pub bio: Option<String>,
}

#[derive(Debug)]
pub struct UpdateUserDTO {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub status: Option<bool>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub name: String,
    pub status: bool,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserDTO {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<ProfileDTO>,
}

#[derive(Debug)]
pub struct GetUserPageDTO {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct UserPageDTO {
    pub users: Vec<UserDTO>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}
