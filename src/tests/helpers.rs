use sqlx::PgPool;
use uuid::Uuid;

pub async fn init_schema(pool: &PgPool) {
    sqlx::query(
        r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                email TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
        "#,
    )
    .execute(pool)
    .await
    .expect("create users table");
    sqlx::query(
        r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL REFERENCES users (id),
                name TEXT NOT NULL,
                status BOOLEAN NOT NULL DEFAULT TRUE,
                bio TEXT
            )
        "#,
    )
    .execute(pool)
    .await
    .expect("create profiles table");
}

pub fn unique_email() -> String {
    let id = Uuid::now_v7().as_simple().to_string();
    format!("{}@test.example", &id[..16])
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .expect("find user by email")
}

pub async fn count_users(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count users")
}

pub async fn count_profiles(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count profiles")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete profile");
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}
