pub mod event;

/// Opaque session token handed out at login and kept in the key-value
/// store until logout or expiry.
pub struct AccessToken(pub String);
