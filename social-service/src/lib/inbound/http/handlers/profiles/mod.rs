use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::profile::models::ProfileWithOwner;

pub mod get_my_profile;
pub mod upsert_profile;

/// Wire representation of a profile with its owner's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub user: ProfileOwnerData,
    pub status: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOwnerData {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<&ProfileWithOwner> for ProfileData {
    fn from(view: &ProfileWithOwner) -> Self {
        Self {
            id: view.profile.id.to_string(),
            user: ProfileOwnerData {
                id: view.owner.id.to_string(),
                name: view.owner.name.clone(),
                avatar: view.owner.avatar.clone(),
            },
            status: view.profile.status.clone(),
            company: view.profile.company.clone(),
            website: view.profile.website.clone(),
            location: view.profile.location.clone(),
            bio: view.profile.bio.clone(),
            skills: view.profile.skills.clone(),
            created_at: view.profile.created_at,
        }
    }
}
