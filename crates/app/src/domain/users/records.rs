//! User wire records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront::users::{User, UserId, UserRole};

use crate::domain::users::models::NewUser;

/// Profile row as returned by the `users` resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: UserId::from_uuid(record.id),
            email: record.email,
            full_name: record.full_name,
            role: record.role,
            created_at: record.created_at,
        }
    }
}

/// Insert payload for the `users` resource.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewUserRecord {
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

impl From<NewUser> for NewUserRecord {
    fn from(user: NewUser) -> Self {
        Self {
            email: user.email,
            full_name: user.full_name,
            role: user.role,
        }
    }
}
