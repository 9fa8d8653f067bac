use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read view joining a user with its profile, as returned by every
/// listing and lookup query.
#[derive(Debug, Clone)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::user::User;

    #[test]
    fn test_new_user_timestamps_match() {
        let user = User::new("test@example.com".to_owned());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.email, "test@example.com");
    }
}
