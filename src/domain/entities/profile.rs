use crate::domain::entities::{
    id::Id,
    user::User
};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub name: String,
    pub status: bool,
    pub bio: Option<String>,
}

impl Profile {
    pub fn new(user_id: Id<User>, name: String, status: bool, bio: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            name,
            status,
            bio,
        }
    }
}

/// Partial update for a profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub status: Option<bool>,
    pub bio: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.bio.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::profile::ProfilePatch;

    #[test]
    fn test_empty_patch() {
        assert!(ProfilePatch::default().is_empty());
        let patch = ProfilePatch {
            bio: Some("hello".to_owned()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
