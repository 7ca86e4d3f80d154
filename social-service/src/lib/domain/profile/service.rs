use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::profile::errors::ProfileError;
use crate::profile::models::Profile;
use crate::profile::models::ProfileId;
use crate::profile::models::ProfileOwner;
use crate::profile::models::ProfileWithOwner;
use crate::profile::models::UpsertProfileCommand;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service for profiles.
pub struct ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    profiles: Arc<PR>,
    users: Arc<UR>,
}

impl<PR, UR> ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    pub fn new(profiles: Arc<PR>, users: Arc<UR>) -> Self {
        Self { profiles, users }
    }

    async fn owner(&self, id: &UserId) -> Result<User, ProfileError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?
            .ok_or(ProfileError::OwnerNotFound(id.to_string()))
    }
}

#[async_trait]
impl<PR, UR> ProfileServicePort for ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    async fn get_profile_for_user(&self, user: &UserId) -> Result<ProfileWithOwner, ProfileError> {
        let owner = self.owner(user).await?;

        let profile = self
            .profiles
            .find_by_user(user)
            .await?
            .ok_or(ProfileError::NotFound(user.to_string()))?;

        Ok(ProfileWithOwner {
            profile,
            owner: ProfileOwner::from_user(&owner),
        })
    }

    async fn upsert_profile(
        &self,
        user: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<ProfileWithOwner, ProfileError> {
        let owner = self.owner(user).await?;

        let profile = Profile {
            id: ProfileId::new(),
            user: *user,
            status: command.status,
            company: command.company,
            website: command.website,
            location: command.location,
            bio: command.bio,
            skills: command.skills,
            created_at: Utc::now(),
        };

        let stored = self.profiles.upsert(profile).await?;

        Ok(ProfileWithOwner {
            profile: stored,
            owner: ProfileOwner::from_user(&owner),
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::errors::UserError;
    use crate::user::models::DisplayName;
    use crate::user::models::EmailAddress;

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn find_by_user(&self, user: &UserId) -> Result<Option<Profile>, ProfileError>;
            async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn test_user() -> User {
        User {
            id: UserId::new(),
            name: DisplayName::new("Pat Profile".to_string()).unwrap(),
            email: EmailAddress::new("pat@example.com".to_string()).unwrap(),
            avatar: Some("https://example.com/pat.png".to_string()),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_profile(user: &UserId) -> Profile {
        Profile {
            id: ProfileId::new(),
            user: *user,
            status: "Developer".to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            skills: vec!["Rust".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_profile_joins_owner_fields() {
        let mut profiles = MockTestProfileRepository::new();
        let mut users = MockTestUserRepository::new();

        let owner = test_user();
        let owner_id = owner.id;
        let returned_owner = owner.clone();
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_owner.clone())));

        let profile = test_profile(&owner_id);
        let returned_profile = profile.clone();
        profiles
            .expect_find_by_user()
            .withf(move |user| *user == owner_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_profile.clone())));

        let service = ProfileService::new(Arc::new(profiles), Arc::new(users));

        let result = service.get_profile_for_user(&owner_id).await.unwrap();
        assert_eq!(result.owner.name, "Pat Profile");
        assert_eq!(result.profile.status, "Developer");
    }

    #[tokio::test]
    async fn get_missing_profile_is_not_found() {
        let mut profiles = MockTestProfileRepository::new();
        let mut users = MockTestUserRepository::new();

        let owner = test_user();
        let returned_owner = owner.clone();
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_owner.clone())));
        profiles
            .expect_find_by_user()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(profiles), Arc::new(users));

        let result = service.get_profile_for_user(&owner.id).await;
        assert!(matches!(result.unwrap_err(), ProfileError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_profile_for_deleted_user_fails() {
        let mut profiles = MockTestProfileRepository::new();
        let mut users = MockTestUserRepository::new();

        users.expect_find_by_id().times(1).returning(|_| Ok(None));
        profiles.expect_find_by_user().times(0);

        let service = ProfileService::new(Arc::new(profiles), Arc::new(users));

        let result = service.get_profile_for_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), ProfileError::OwnerNotFound(_)));
    }

    #[tokio::test]
    async fn upsert_profile_stores_command_fields() {
        let mut profiles = MockTestProfileRepository::new();
        let mut users = MockTestUserRepository::new();

        let owner = test_user();
        let owner_id = owner.id;
        let returned_owner = owner.clone();
        users
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned_owner.clone())));

        profiles
            .expect_upsert()
            .withf(move |profile| {
                profile.user == owner_id
                    && profile.status == "Senior Developer"
                    && profile.skills == vec!["Rust".to_string(), "SQL".to_string()]
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(profiles), Arc::new(users));

        let command = UpsertProfileCommand {
            status: "Senior Developer".to_string(),
            company: Some("Acme".to_string()),
            website: None,
            location: None,
            bio: None,
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        };

        let result = service.upsert_profile(&owner_id, command).await.unwrap();
        assert_eq!(result.profile.status, "Senior Developer");
        assert_eq!(result.owner.id, owner_id);
    }
}
