use std::sync::Arc;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{
    CreateUserDTO, GetUserPageDTO, ProfileDTO, UpdateUserDTO, UserDTO, UserPageDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch};
use crate::domain::entities::user::{User, UserWithProfile};

fn to_user_dto(record: UserWithProfile) -> UserDTO {
    UserDTO {
        id: record.user.id.value.to_string(),
        email: record.user.email,
        created_at: record.user.created_at,
        updated_at: record.user.updated_at,
        profile: record.profile.map(|profile| ProfileDTO {
            id: profile.id.value.to_string(),
            name: profile.name,
            status: profile.status,
            bio: profile.bio,
        }),
    }
}

// Inserts the user and its profile on one session, so both land or neither.
#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_writer: Arc<dyn UserWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_writer: Arc<dyn UserWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_writer,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<UserDTO> {
        let user = User::new(dto.email);
        let profile = Profile::new(user.id.clone(), dto.name, dto.status.unwrap_or(true), dto.bio);

        self.user_writer.insert(user.clone()).await?;
        self.profile_writer.insert(profile.clone()).await?;
        self.db_session.commit().await?;

        Ok(to_user_dto(UserWithProfile {
            user,
            profile: Some(profile),
        }))
    }
}

#[derive(Clone)]
pub struct GetUserInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetUserInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let record = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        Ok(to_user_dto(record))
    }
}

#[derive(Clone)]
pub struct ListUsersInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl ListUsersInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<UserDTO>> {
        let records = self.user_reader.find_all().await?;
        Ok(records.into_iter().map(to_user_dto).collect())
    }
}

// Bounded page query plus a separate count; the two are not issued in a
// single snapshot, so the total may race with concurrent writes.
#[derive(Clone)]
pub struct GetUserPageInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetUserPageInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: GetUserPageDTO) -> AppResult<UserPageDTO> {
        let page = dto.page.max(1);
        let limit = dto.limit.max(1);
        let offset = (page - 1) * limit;

        let records = self.user_reader.find_page(limit, offset).await?;
        let total = self.user_reader.count().await?;
        let total_pages = (total + limit - 1) / limit;

        Ok(UserPageDTO {
            users: records.into_iter().map(to_user_dto).collect(),
            total,
            page,
            total_pages,
        })
    }
}

#[derive(Clone)]
pub struct UpdateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpdateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateUserDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if let Some(email) = dto.email.as_deref() {
            self.user_writer.update_email(&user_id, email).await?;
        }

        let patch = ProfilePatch {
            name: dto.name,
            status: dto.status,
            bio: dto.bio,
        };
        if !patch.is_empty() {
            self.profile_writer.update(&user_id, patch).await?;
        }

        let updated = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        self.db_session.commit().await?;

        Ok(to_user_dto(updated))
    }
}

// The profile row has no cascade configured, so it is removed explicitly
// before the user row.
#[derive(Clone)]
pub struct DeleteUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl DeleteUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        let record = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if record.profile.is_some() {
            self.profile_writer.delete_by_user(&user_id).await?;
        }
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;

        Ok(())
    }
}
