use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
    pub profile_picture: Option<String>,
    // Present exactly when role is Provider.
    pub provider_profile: Option<ProviderProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderProfile {
    pub service_category: String,
    pub experience: String,
    pub certification: String,
    pub study_degree: String,
}

/// Provider listing entry for client-side browsing, carrying the
/// availability flag computed from the confirmed-booking count.
#[derive(Debug)]
pub struct ProviderSummary {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub wilaya: String,
    pub profile: ProviderProfile,
    pub available: bool,
}
