//! User input models.

use shopfront::users::UserRole;

/// New profile row, inserted at registration.
///
/// Credentials are registered with the auth plane separately; the profile
/// never carries password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}
