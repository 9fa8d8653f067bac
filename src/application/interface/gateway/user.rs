use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::{User, UserWithProfile};

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: User) -> AppResult<Id<User>>;
    async fn update_email(&self, user_id: &Id<User>, email: &str) -> AppResult<()>;
    async fn delete(&self, user_id: &Id<User>) -> AppResult<()>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<UserWithProfile>>;
    async fn find_all(&self) -> AppResult<Vec<UserWithProfile>>;
    async fn find_page(&self, limit: i64, offset: i64) -> AppResult<Vec<UserWithProfile>>;
    async fn count(&self) -> AppResult<i64>;
}
