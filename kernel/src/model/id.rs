use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($id:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[sqlx(transparent)]
        pub struct $id(Uuid);

        impl $id {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn raw(self) -> Uuid {
                self.0
            }
        }

        impl Default for $id {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $id {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $id {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(UserId, "Identifier of a user in any role.");
define_id!(EventId, "Identifier of a client's event.");
define_id!(BookingId, "Identifier of a booking binding an event to a provider.");
define_id!(ServiceId, "Identifier of a provider's offered service.");
define_id!(PortfolioId, "Identifier of a provider's portfolio item.");
define_id!(PortfolioImageId, "Identifier of a single portfolio image.");
