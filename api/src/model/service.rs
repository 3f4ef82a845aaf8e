use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ServiceId, UserId},
    service::Service,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(skip)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    pub provider_id: Option<UserId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
    pub items: Vec<ServiceResponse>,
}

impl From<Vec<Service>> for ServicesResponse {
    fn from(value: Vec<Service>) -> Self {
        Self {
            items: value.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub service_id: ServiceId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub provider_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        let Service {
            service_id,
            title,
            category,
            description,
            provider_id,
            created_at,
        } = value;
        Self {
            service_id,
            title,
            category,
            description,
            provider_id,
            created_at,
        }
    }
}
