use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub status: bool,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: Option<ProfileRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserRecord>,
    pub total: i64,
    pub page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn fetch_all(&self) -> ClientResult<Vec<UserRecord>>;
    async fn fetch_by_id(&self, user_id: &str) -> ClientResult<UserRecord>;
    async fn fetch_page(&self, page: i64, limit: i64) -> ClientResult<UserPage>;
    async fn create(&self, user: NewUser) -> ClientResult<UserRecord>;
    async fn update(&self, user_id: &str, patch: UserPatch) -> ClientResult<UserRecord>;
    async fn delete(&self, user_id: &str) -> ClientResult<()>;
}

pub struct HttpUsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUsersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/users{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|message| message.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ClientError::Api { status, message })
    }
}

#[async_trait]
impl UsersApi for HttpUsersClient {
    async fn fetch_all(&self) -> ClientResult<Vec<UserRecord>> {
        let response = self.http.get(self.url("/all")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_by_id(&self, user_id: &str) -> ClientResult<UserRecord> {
        let response = self
            .http
            .get(self.url(&format!("/{}", user_id)))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_page(&self, page: i64, limit: i64) -> ClientResult<UserPage> {
        let response = self
            .http
            .get(self.url("/paginate"))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, user: NewUser) -> ClientResult<UserRecord> {
        let response = self
            .http
            .post(self.url("/create"))
            .json(&user)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, user_id: &str, patch: UserPatch) -> ClientResult<UserRecord> {
        let response = self
            .http
            .patch(self.url(&format!("/{}", user_id)))
            .json(&patch)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, user_id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/{}", user_id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
