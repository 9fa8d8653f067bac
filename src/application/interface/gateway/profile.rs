use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch};
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn update(&self, user_id: &Id<User>, patch: ProfilePatch) -> AppResult<()>;
    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()>;
}
