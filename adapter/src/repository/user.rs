use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateClient, CreateProvider, ProviderSearch, UpdateProfilePicture},
        ProviderSummary, User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation,
    model::user::{ProviderRow, UserRow},
    ConnectionPool,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create_client(&self, event: CreateClient) -> AppResult<UserId> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                INSERT INTO users
                (user_id, email, password_hash, role,
                 first_name, last_name, phone, address, wilaya)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(Role::Client.to_string())
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.phone)
        .bind(&event.address)
        .bind(&event.wilaya)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::UnprocessableEntity(format!("email {} is already registered", event.email))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        Ok(user_id)
    }

    async fn create_provider(&self, event: CreateProvider) -> AppResult<UserId> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                INSERT INTO users
                (user_id, email, password_hash, role,
                 first_name, last_name, phone, address, wilaya,
                 service_category, experience, certification, study_degree)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(Role::Provider.to_string())
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.phone)
        .bind(&event.address)
        .bind(&event.wilaya)
        .bind(&event.service_category)
        .bind(&event.experience)
        .bind(&event.certification)
        .bind(&event.study_degree)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::UnprocessableEntity(format!("email {} is already registered", event.email))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        Ok(user_id)
    }

    async fn ensure_admin(&self, email: &str, password: &str) -> AppResult<()> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                INSERT INTO users
                (user_id, email, password_hash, role, first_name, last_name,
                 phone, address, wilaya)
                VALUES ($1, $2, $3, $4, 'Admin', 'User', '', '', '')
                ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(UserId::new())
        .bind(email)
        .bind(&password_hash)
        .bind(Role::Admin.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT
                    user_id, email, role,
                    first_name, last_name, phone, address, wilaya,
                    profile_picture,
                    service_category, experience, certification, study_degree
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }

    async fn find_providers(&self, query: ProviderSearch) -> AppResult<Vec<ProviderSummary>> {
        let rows: Vec<ProviderRow> = sqlx::query_as(
            r#"
                SELECT
                    u.user_id,
                    u.first_name,
                    u.last_name,
                    u.wilaya,
                    u.service_category,
                    u.experience,
                    u.certification,
                    u.study_degree,
                    COUNT(b.booking_id) FILTER (WHERE b.status = 'confirmed')
                        AS confirmed_count
                FROM users AS u
                LEFT JOIN bookings AS b ON b.provider_id = u.user_id
                WHERE u.role = 'provider'
                  AND ($1::text IS NULL OR u.service_category = $1)
                  AND ($2::text IS NULL OR u.wilaya = $2)
                GROUP BY u.user_id
                ORDER BY u.last_name ASC, u.first_name ASC
            "#,
        )
        .bind(query.category)
        .bind(query.wilaya)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ProviderSummary::from).collect())
    }

    async fn update_profile_picture(&self, event: UpdateProfilePicture) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET profile_picture = $1
                WHERE user_id = $2
            "#,
        )
        .bind(&event.file_name)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn register_client_and_fetch_profile(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create_client(CreateClient::new(
                "amina@example.com".into(),
                "secret".into(),
                "Amina".into(),
                "B.".into(),
                "0550".into(),
                "12 Rue Didouche".into(),
                "Alger".into(),
            ))
            .await?;

        let user = repo.find_by_id(user_id).await?.unwrap();
        assert_eq!(user.email, "amina@example.com");
        assert_eq!(user.role, Role::Client);
        assert!(user.provider_profile.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn duplicate_email_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let register = || {
            CreateClient::new(
                "amina@example.com".into(),
                "secret".into(),
                "Amina".into(),
                "B.".into(),
                "0550".into(),
                "12 Rue Didouche".into(),
                "Alger".into(),
            )
        };
        repo.create_client(register()).await?;
        let res = repo.create_client(register()).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn provider_registration_carries_profile_fields(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create_provider(CreateProvider::new(
                "karim@example.com".into(),
                "secret".into(),
                "Karim".into(),
                "Z.".into(),
                "0770".into(),
                "Oran centre".into(),
                "Oran".into(),
                "catering".into(),
                "5 years of weddings".into(),
                "HACCP".into(),
                "Licence".into(),
            ))
            .await?;

        let user = repo.find_by_id(user_id).await?.unwrap();
        assert_eq!(user.role, Role::Provider);
        let profile = user.provider_profile.unwrap();
        assert_eq!(profile.service_category, "catering");
        assert_eq!(profile.certification, "HACCP");
        Ok(())
    }

    #[sqlx::test]
    async fn ensure_admin_is_idempotent(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.ensure_admin("admin@ezyevents.com", "admin").await?;
        repo.ensure_admin("admin@ezyevents.com", "admin").await?;

        let providers = repo.find_providers(ProviderSearch::default()).await?;
        assert!(providers.is_empty());
        Ok(())
    }
}
