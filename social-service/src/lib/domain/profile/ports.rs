use async_trait::async_trait;

use crate::profile::errors::ProfileError;
use crate::profile::models::Profile;
use crate::profile::models::ProfileWithOwner;
use crate::profile::models::UpsertProfileCommand;
use crate::user::models::UserId;

/// Port for profile domain service operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// The profile owned by a user, with the owner's display fields.
    ///
    /// # Errors
    /// * `NotFound` - the user has no profile
    /// * `OwnerNotFound` - the user no longer exists
    /// * `DatabaseError` - store operation failed
    async fn get_profile_for_user(&self, user: &UserId) -> Result<ProfileWithOwner, ProfileError>;

    /// Create or replace a user's profile.
    ///
    /// # Errors
    /// * `OwnerNotFound` - the user no longer exists
    /// * `DatabaseError` - store operation failed
    async fn upsert_profile(
        &self,
        user: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<ProfileWithOwner, ProfileError>;
}

/// Persistence operations for the profile aggregate.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// The profile owned by a user (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_user(&self, user: &UserId) -> Result<Option<Profile>, ProfileError>;

    /// Insert the profile, or replace the user's existing one. Returns the
    /// stored profile (the original id survives a replace).
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
}
