use kernel::model::{
    id::UserId,
    role::Role,
    user::{ProviderProfile, ProviderSummary, User},
};
use shared::error::AppError;

use kernel::model::booking::is_available;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
    pub profile_picture: Option<String>,
    pub service_category: Option<String>,
    pub experience: Option<String>,
    pub certification: Option<String>,
    pub study_degree: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            email,
            role,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
            profile_picture,
            service_category,
            experience,
            certification,
            study_degree,
        } = value;
        let role: Role = role
            .parse()
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        let provider_profile = match role {
            Role::Provider => Some(ProviderProfile {
                service_category: service_category.unwrap_or_default(),
                experience: experience.unwrap_or_default(),
                certification: certification.unwrap_or_default(),
                study_degree: study_degree.unwrap_or_default(),
            }),
            Role::Admin | Role::Client => None,
        };
        Ok(User {
            user_id,
            email,
            role,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
            profile_picture,
            provider_profile,
        })
    }
}

/// One provider per row, with the confirmed-booking count aggregated in
/// the query so availability never gets stored.
#[derive(sqlx::FromRow)]
pub struct ProviderRow {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub wilaya: String,
    pub service_category: Option<String>,
    pub experience: Option<String>,
    pub certification: Option<String>,
    pub study_degree: Option<String>,
    pub confirmed_count: i64,
}

impl From<ProviderRow> for ProviderSummary {
    fn from(value: ProviderRow) -> Self {
        let ProviderRow {
            user_id,
            first_name,
            last_name,
            wilaya,
            service_category,
            experience,
            certification,
            study_degree,
            confirmed_count,
        } = value;
        ProviderSummary {
            user_id,
            first_name,
            last_name,
            wilaya,
            profile: ProviderProfile {
                service_category: service_category.unwrap_or_default(),
                experience: experience.unwrap_or_default(),
                certification: certification.unwrap_or_default(),
                study_degree: study_degree.unwrap_or_default(),
            },
            available: is_available(confirmed_count),
        }
    }
}
