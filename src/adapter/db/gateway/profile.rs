use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (id, user_id, name, status, bio)
                            VALUES
                                ($1, $2, $3, $4, $5)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&profile.id.value)
                    .bind(&profile.user_id.value)
                    .bind(&profile.name)
                    .bind(&profile.status)
                    .bind(&profile.bio)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, user_id: &Id<User>, patch: ProfilePatch) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let patch = patch.clone();
                async move {
                    // NULL binds fall through to the current column value.
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                name = COALESCE($2, name),
                                status = COALESCE($3, status),
                                bio = COALESCE($4, bio)
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(&user_id)
                    .bind(&patch.name)
                    .bind(&patch.status)
                    .bind(&patch.bio)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
                        .bind(&user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
