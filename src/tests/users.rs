use std::sync::Arc;

use rstest::rstest;
use sqlx::PgPool;

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppError;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, GetUserPageDTO, UpdateUserDTO, UserDTO};
use crate::application::interactors::users::{
    CreateUserInteractor, DeleteUserInteractor, GetUserInteractor, GetUserPageInteractor,
    UpdateUserInteractor,
};
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::tests::fixtures::test_config;
use crate::tests::helpers::{
    count_profiles, count_users, delete_user, find_user_by_email, init_schema, unique_email,
};

async fn test_pool(config: &AppConfig) -> PgPool {
    let pool = init_db(config).await.expect("connect to test database");
    init_schema(&pool).await;
    pool
}

fn create_interactor(pool: &PgPool) -> CreateUserInteractor {
    let session = SqlxSession::new_lazy(pool.clone());
    CreateUserInteractor::new(
        Arc::new(session.clone()),
        Arc::new(UserGateway::new(session.clone())),
        Arc::new(ProfileGateway::new(session)),
    )
}

fn get_interactor(pool: &PgPool) -> GetUserInteractor {
    let session = SqlxSession::new_lazy(pool.clone());
    GetUserInteractor::new(Arc::new(UserGateway::new(session)))
}

fn update_interactor(pool: &PgPool) -> UpdateUserInteractor {
    let session = SqlxSession::new_lazy(pool.clone());
    let user_gateway = UserGateway::new(session.clone());
    UpdateUserInteractor::new(
        Arc::new(session.clone()),
        Arc::new(user_gateway.clone()),
        Arc::new(user_gateway),
        Arc::new(ProfileGateway::new(session)),
    )
}

fn delete_interactor(pool: &PgPool) -> DeleteUserInteractor {
    let session = SqlxSession::new_lazy(pool.clone());
    let user_gateway = UserGateway::new(session.clone());
    DeleteUserInteractor::new(
        Arc::new(session.clone()),
        Arc::new(user_gateway.clone()),
        Arc::new(user_gateway),
        Arc::new(ProfileGateway::new(session)),
    )
}

async fn create_sample(pool: &PgPool, email: &str, name: &str) -> UserDTO {
    create_interactor(pool)
        .execute(CreateUserDTO {
            email: email.to_owned(),
            name: name.to_owned(),
            status: None,
            bio: Some("integration test".to_owned()),
        })
        .await
        .expect("create user")
}

#[rstest]
#[ignore = "requires TEST_DATABASE_URL"]
#[tokio::test]
async fn test_create_then_get_round_trip(test_config: AppConfig) {
    let pool = test_pool(&test_config).await;
    let email = unique_email();

    let created = create_sample(&pool, &email, "Ada Lovelace").await;
    let fetched = get_interactor(&pool)
        .execute(IdDTO {
            id: created.id.clone(),
        })
        .await
        .expect("get user");

    assert_eq!(fetched.email, email);
    assert_eq!(fetched.profile.unwrap().name, "Ada Lovelace");

    delete_user(&pool, created.id.parse().unwrap()).await;
}

#[rstest]
#[ignore = "requires TEST_DATABASE_URL"]
#[tokio::test]
async fn test_paginate_bounds_page_size(test_config: AppConfig) {
    let pool = test_pool(&test_config).await;
    let mut created = Vec::new();
    for i in 0..12 {
        created.push(create_sample(&pool, &unique_email(), &format!("User {}", i)).await);
    }

    let session = SqlxSession::new_lazy(pool.clone());
    let interactor = GetUserPageInteractor::new(Arc::new(UserGateway::new(session)));
    let page = interactor
        .execute(GetUserPageDTO { page: 1, limit: 10 })
        .await
        .expect("paginate");

    assert!(page.users.len() <= 10);
    assert_eq!(page.total_pages, (page.total + 9) / 10);

    for user in created {
        delete_user(&pool, user.id.parse().unwrap()).await;
    }
}

#[rstest]
#[ignore = "requires TEST_DATABASE_URL"]
#[tokio::test]
async fn test_update_bio_only_keeps_email_and_name(test_config: AppConfig) {
    let pool = test_pool(&test_config).await;
    let email = unique_email();
    let created = create_sample(&pool, &email, "Ada Lovelace").await;

    let updated = update_interactor(&pool)
        .execute(UpdateUserDTO {
            id: created.id.clone(),
            email: None,
            name: None,
            status: None,
            bio: Some("rewritten".to_owned()),
        })
        .await
        .expect("update user");

    assert_eq!(updated.email, email);
    let profile = updated.profile.unwrap();
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.bio.as_deref(), Some("rewritten"));

    delete_user(&pool, created.id.parse().unwrap()).await;
}

#[rstest]
#[ignore = "requires TEST_DATABASE_URL"]
#[tokio::test]
async fn test_delete_removes_both_rows(test_config: AppConfig) {
    let pool = test_pool(&test_config).await;
    let email = unique_email();
    let created = create_sample(&pool, &email, "Ada Lovelace").await;
    let user_id = created.id.parse().unwrap();

    delete_interactor(&pool)
        .execute(IdDTO {
            id: created.id.clone(),
        })
        .await
        .expect("delete user");

    assert_eq!(count_users(&pool, user_id).await, 0);
    assert_eq!(count_profiles(&pool, user_id).await, 0);
    assert!(find_user_by_email(&pool, &email).await.is_none());

    let result = get_interactor(&pool).execute(IdDTO { id: created.id }).await;
    assert!(matches!(result, Err(AppError::UserNotFound)));
}
