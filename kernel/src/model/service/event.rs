use derive_new::new;

use crate::model::id::UserId;

#[derive(new)]
pub struct CreateService {
    pub title: String,
    pub category: String,
    pub description: String,
    pub provider_id: UserId,
}
