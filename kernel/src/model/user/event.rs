use derive_new::new;

use crate::model::id::UserId;

#[derive(new)]
pub struct CreateClient {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
}

#[derive(new)]
pub struct CreateProvider {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
    pub service_category: String,
    pub experience: String,
    pub certification: String,
    pub study_degree: String,
}

#[derive(new)]
pub struct UpdateProfilePicture {
    pub user_id: UserId,
    pub file_name: String,
}

/// Optional filters for provider browsing.
#[derive(Debug, Default, new)]
pub struct ProviderSearch {
    pub category: Option<String>,
    pub wilaya: Option<String>,
}
