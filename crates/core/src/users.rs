//! User Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ids::TypedUuid;

/// User UUID
pub type UserId = TypedUuid<User>;

/// Role attached to a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May manage the product catalog.
    Admin,

    /// May browse, order and view their own history.
    Customer,
}

impl UserRole {
    /// Whether this role may use the admin surface.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Customer => f.write_str("customer"),
        }
    }
}

/// User profile as stored by the collaborator's `users` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_spellings_match_the_wire() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).expect("serialize role"),
            "\"admin\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"customer\"").expect("deserialize role"),
            UserRole::Customer
        );
    }

    #[test]
    fn default_role_is_customer() {
        assert_eq!(UserRole::default(), UserRole::Customer);
        assert!(!UserRole::default().is_admin());
    }
}
