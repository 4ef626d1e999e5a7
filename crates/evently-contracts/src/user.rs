// User DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creator summary embedded in event responses.
///
/// Only the public subset of the user record; password hashes and
/// timestamps never leave the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
