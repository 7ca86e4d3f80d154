use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::profile::errors::ProfileError;
use crate::profile::models::Profile;
use crate::profile::models::ProfileId;
use crate::profile::ports::ProfileRepository;
use crate::user::models::UserId;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::postgres::PgRow) -> Profile {
        Profile {
            id: ProfileId(row.get("id")),
            user: UserId(row.get("user_id")),
            status: row.get("status"),
            company: row.get("company"),
            website: row.get("website"),
            location: row.get("location"),
            bio: row.get("bio"),
            skills: row.get("skills"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user: &UserId) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, status, company, website, location, bio, skills, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_profile))
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        // On conflict the original row (and its id) survives; only the
        // content columns are replaced.
        let row = sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, status, company, website, location, bio, skills, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id)
            DO UPDATE SET
                status = EXCLUDED.status,
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                skills = EXCLUDED.skills
            RETURNING id, user_id, status, company, website, location, bio, skills, created_at
            "#,
        )
        .bind(profile.id.0)
        .bind(profile.user.as_uuid())
        .bind(&profile.status)
        .bind(profile.company.as_deref())
        .bind(profile.website.as_deref())
        .bind(profile.location.as_deref())
        .bind(profile.bio.as_deref())
        .bind(&profile.skills)
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(Self::row_to_profile(&row))
    }
}
