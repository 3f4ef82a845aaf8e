use kernel::model::stats::MarketplaceStats;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_events: i64,
    pub total_providers: i64,
    pub total_bookings: i64,
}

impl From<MarketplaceStats> for StatsResponse {
    fn from(value: MarketplaceStats) -> Self {
        let MarketplaceStats {
            total_users,
            total_events,
            total_providers,
            total_bookings,
        } = value;
        Self {
            total_users,
            total_events,
            total_providers,
            total_bookings,
        }
    }
}
