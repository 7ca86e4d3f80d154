use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::models::User;
use crate::user::models::UserId;

/// Profile aggregate entity. At most one per user.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub user: UserId,
    pub status: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A profile together with its owner's display fields, the shape the read
/// endpoints return.
#[derive(Debug, Clone)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: ProfileOwner,
}

/// Owner display fields joined onto a profile read.
#[derive(Debug, Clone)]
pub struct ProfileOwner {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

impl ProfileOwner {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.as_str().to_string(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Command to create or replace the caller's profile.
#[derive(Debug, Clone)]
pub struct UpsertProfileCommand {
    pub status: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
}
