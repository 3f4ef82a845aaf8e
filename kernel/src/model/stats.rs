/// Aggregate counters shown on the admin dashboard.
#[derive(Debug, PartialEq, Eq)]
pub struct MarketplaceStats {
    pub total_users: i64,
    pub total_events: i64,
    pub total_providers: i64,
    pub total_bookings: i64,
}
