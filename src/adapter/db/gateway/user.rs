use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::{User, UserWithProfile};

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn user_with_profile(row: &PgRow) -> AppResult<UserWithProfile> {
        let user_id: Uuid = row.try_get("id")?;
        let user = User {
            id: Id::new(user_id),
            email: row.try_get("email")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        };
        // Profile columns come from a LEFT JOIN and are NULL for users
        // without a profile row.
        let profile_id: Option<Uuid> = row.try_get("profile_id")?;
        let profile = match profile_id {
            Some(profile_id) => Some(Profile {
                id: Id::new(profile_id),
                user_id: Id::new(user_id),
                name: row.try_get("name")?,
                status: row.try_get("status")?,
                bio: row.try_get("bio")?,
            }),
            None => None,
        };
        Ok(UserWithProfile { user, profile })
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                let user = user.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, email, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&user.id.value)
                    .bind(&user.email)
                    .bind(&user.created_at)
                    .bind(&user.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update_email(&self, user_id: &Id<User>, email: &str) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let email = email.to_owned();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                users
                            SET
                                email = $2, updated_at = $3
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(&user_id)
                    .bind(&email)
                    .bind(Utc::now())
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM users WHERE id = $1")
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

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<UserWithProfile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                u.id, u.email, u.created_at, u.updated_at,
                                p.id AS profile_id, p.name, p.status, p.bio
                            FROM
                                users AS u
                            LEFT JOIN profiles AS p ON p.user_id = u.id
                            WHERE u.id = $1
                        "#,
                    )
                    .bind(&user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    match result {
                        Some(row) => Ok(Some(Self::user_with_profile(&row)?)),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<UserWithProfile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                u.id, u.email, u.created_at, u.updated_at,
                                p.id AS profile_id, p.name, p.status, p.bio
                            FROM
                                users AS u
                            LEFT JOIN profiles AS p ON p.user_id = u.id
                            ORDER BY
                                u.created_at DESC
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::user_with_profile).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_page(&self, limit: i64, offset: i64) -> AppResult<Vec<UserWithProfile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                u.id, u.email, u.created_at, u.updated_at,
                                p.id AS profile_id, p.name, p.status, p.bio
                            FROM
                                users AS u
                            LEFT JOIN profiles AS p ON p.user_id = u.id
                            ORDER BY
                                u.created_at DESC
                            LIMIT $1 OFFSET $2
                        "#,
                    )
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::user_with_profile).collect()
                }
                .boxed()
            })
            .await
    }

    async fn count(&self) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                async move {
                    let row = sqlx::query("SELECT COUNT(id) AS total FROM users")
                        .fetch_one(tx.as_mut())
                        .await?;

                    Ok(row.try_get("total")?)
                }
                .boxed()
            })
            .await
    }
}
