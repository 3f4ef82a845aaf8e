use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateClient, CreateProvider, ProviderSearch},
        ProviderProfile, ProviderSummary, User,
    },
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Admin,
    Client,
    Provider,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::Client => Self::Client,
            Role::Provider => Self::Provider,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(length(min = 1))]
    pub wilaya: String,
}

impl From<RegisterClientRequest> for CreateClient {
    fn from(value: RegisterClientRequest) -> Self {
        let RegisterClientRequest {
            email,
            password,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
        } = value;
        Self {
            email,
            password,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProviderRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(length(min = 1))]
    pub wilaya: String,
    #[garde(length(min = 1))]
    pub service_category: String,
    #[garde(skip)]
    pub experience: String,
    #[garde(skip)]
    pub certification: String,
    #[garde(skip)]
    pub study_degree: String,
}

impl From<RegisterProviderRequest> for CreateProvider {
    fn from(value: RegisterProviderRequest) -> Self {
        let RegisterProviderRequest {
            email,
            password,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
            service_category,
            experience,
            certification,
            study_degree,
        } = value;
        Self {
            email,
            password,
            first_name,
            last_name,
            phone,
            address,
            wilaya,
            service_category,
            experience,
            certification,
            study_degree,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
    pub role: RoleName,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
    pub profile_picture: Option<String>,
    pub provider_profile: Option<ProviderProfileResponse>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
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
        } = value;
        Self {
            user_id,
            email,
            role: RoleName::from(role),
            first_name,
            last_name,
            phone,
            address,
            wilaya,
            profile_picture,
            provider_profile: provider_profile.map(ProviderProfileResponse::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfileResponse {
    pub service_category: String,
    pub experience: String,
    pub certification: String,
    pub study_degree: String,
}

impl From<ProviderProfile> for ProviderProfileResponse {
    fn from(value: ProviderProfile) -> Self {
        let ProviderProfile {
            service_category,
            experience,
            certification,
            study_degree,
        } = value;
        Self {
            service_category,
            experience,
            certification,
            study_degree,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSearchQuery {
    pub category: Option<String>,
    pub wilaya: Option<String>,
}

impl From<ProviderSearchQuery> for ProviderSearch {
    fn from(value: ProviderSearchQuery) -> Self {
        let ProviderSearchQuery { category, wilaya } = value;
        Self { category, wilaya }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersResponse {
    pub items: Vec<ProviderResponse>,
}

impl From<Vec<ProviderSummary>> for ProvidersResponse {
    fn from(value: Vec<ProviderSummary>) -> Self {
        Self {
            items: value.into_iter().map(ProviderResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
    pub provider_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub wilaya: String,
    pub service_category: String,
    pub experience: String,
    pub certification: String,
    pub study_degree: String,
    pub available: bool,
}

impl From<ProviderSummary> for ProviderResponse {
    fn from(value: ProviderSummary) -> Self {
        let ProviderSummary {
            user_id,
            first_name,
            last_name,
            wilaya,
            profile,
            available,
        } = value;
        let ProviderProfile {
            service_category,
            experience,
            certification,
            study_degree,
        } = profile;
        Self {
            provider_id: user_id,
            first_name,
            last_name,
            wilaya,
            service_category,
            experience,
            certification,
            study_degree,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use garde::Validate;

    use super::*;

    fn client_request() -> RegisterClientRequest {
        RegisterClientRequest {
            email: "amina@example.com".into(),
            password: "secret".into(),
            first_name: "Amina".into(),
            last_name: "B.".into(),
            phone: "0550".into(),
            address: "12 Rue Didouche".into(),
            wilaya: "Alger".into(),
        }
    }

    #[test]
    fn valid_client_registration_passes() {
        assert!(client_request().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut req = client_request();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let mut req = client_request();
        req.wilaya = String::new();
        assert!(req.validate().is_err());
    }
}

/// Contact details revealed to a client once a confirmed booking exists.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderContactResponse {
    pub provider_id: UserId,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<User> for ProviderContactResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            email,
            phone,
            address,
            ..
        } = value;
        Self {
            provider_id: user_id,
            email,
            phone,
            address,
        }
    }
}
