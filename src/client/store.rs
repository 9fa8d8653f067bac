use std::sync::Arc;

use tracing::error;

use crate::client::api::{UserRecord, UsersApi};

/// Client-side state for the directory views: the full list, the current
/// page slice, and the selected record. Each fetch replaces its slice of
/// state wholesale; navigating back re-fetches rather than invalidating.
pub struct UsersStore {
    api: Arc<dyn UsersApi>,
    pub all_users: Vec<UserRecord>,
    pub users: Vec<UserRecord>,
    pub total_users: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub user: Option<UserRecord>,
}

impl UsersStore {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self {
            api,
            all_users: Vec::new(),
            users: Vec::new(),
            total_users: 0,
            current_page: 1,
            total_pages: 1,
            user: None,
        }
    }

    // Fetch failures are logged and swallowed; the previous state stays
    // on screen.
    pub async fn fetch_users(&mut self) {
        match self.api.fetch_all().await {
            Ok(users) => self.all_users = users,
            Err(e) => error!("Failed to fetch users: {}", e),
        }
    }

    pub async fn fetch_user_by_id(&mut self, user_id: &str) -> Option<UserRecord> {
        match self.api.fetch_by_id(user_id).await {
            Ok(user) => {
                self.user = Some(user.clone());
                Some(user)
            }
            Err(e) => {
                error!("Failed to fetch user {}: {}", user_id, e);
                None
            }
        }
    }

    pub async fn fetch_paginated_users(&mut self, page: i64, limit: i64) {
        match self.api.fetch_page(page, limit).await {
            Ok(data) => {
                self.users = data.users;
                self.total_users = data.total;
                self.current_page = data.page;
                self.total_pages = data.total_pages;
            }
            Err(e) => error!("Failed to fetch paginated users: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use rstest::rstest;

    use crate::client::api::{
        ClientError, ClientResult, NewUser, UserPage, UserPatch, UserRecord, UsersApi,
    };
    use crate::client::store::UsersStore;

    mock! {
        pub UsersApiMock {}

        #[async_trait]
        impl UsersApi for UsersApiMock {
            async fn fetch_all(&self) -> ClientResult<Vec<UserRecord>>;
            async fn fetch_by_id(&self, user_id: &str) -> ClientResult<UserRecord>;
            async fn fetch_page(&self, page: i64, limit: i64) -> ClientResult<UserPage>;
            async fn create(&self, user: NewUser) -> ClientResult<UserRecord>;
            async fn update(&self, user_id: &str, patch: UserPatch) -> ClientResult<UserRecord>;
            async fn delete(&self, user_id: &str) -> ClientResult<()>;
        }
    }

    fn sample_user(id: &str) -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: id.to_owned(),
            email: format!("{}@example.com", id),
            created_at: now,
            updated_at: now,
            profile: None,
        }
    }

    fn api_error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Internal Server Error".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_users_replaces_full_list() {
        let mut api = MockUsersApiMock::new();
        api.expect_fetch_all()
            .returning(|| Ok(vec![sample_user("a"), sample_user("b")]));

        let mut store = UsersStore::new(Arc::new(api));
        store.fetch_users().await;

        assert_eq!(store.all_users.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_users_error_keeps_previous_state() {
        let mut api = MockUsersApiMock::new();
        api.expect_fetch_all().returning(|| Err(api_error()));

        let mut store = UsersStore::new(Arc::new(api));
        store.all_users = vec![sample_user("a")];
        store.fetch_users().await;

        assert_eq!(store.all_users.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_paginated_users_updates_page_state() {
        let mut api = MockUsersApiMock::new();
        api.expect_fetch_page().returning(|page, _| {
            Ok(UserPage {
                users: vec![sample_user("a")],
                total: 21,
                page,
                total_pages: 3,
            })
        });

        let mut store = UsersStore::new(Arc::new(api));
        store.fetch_paginated_users(2, 10).await;

        assert_eq!(store.users.len(), 1);
        assert_eq!(store.total_users, 21);
        assert_eq!(store.current_page, 2);
        assert_eq!(store.total_pages, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_user_by_id_sets_selected() {
        let mut api = MockUsersApiMock::new();
        api.expect_fetch_by_id()
            .returning(|user_id| Ok(sample_user(user_id)));

        let mut store = UsersStore::new(Arc::new(api));
        let fetched = store.fetch_user_by_id("a").await;

        assert!(fetched.is_some());
        assert_eq!(store.user.as_ref().unwrap().id, "a");
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_user_by_id_error_returns_none() {
        let mut api = MockUsersApiMock::new();
        api.expect_fetch_by_id().returning(|_| Err(api_error()));

        let mut store = UsersStore::new(Arc::new(api));
        let fetched = store.fetch_user_by_id("missing").await;

        assert!(fetched.is_none());
        assert!(store.user.is_none());
    }
}
