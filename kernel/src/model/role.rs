use strum::{Display, EnumString};

/// Closed set of user roles. Stored as lowercase text and never
/// changed after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Provider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_lowercase_text() {
        for role in [Role::Admin, Role::Client, Role::Provider] {
            let text = role.to_string();
            assert_eq!(text, text.to_lowercase());
            assert_eq!(text.parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_text_is_rejected() {
        assert!("superuser".parse::<Role>().is_err());
    }
}
