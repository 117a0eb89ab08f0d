use crate::types::ids::{CollarId, LinkId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Link record for a collar. Its mere existence gates task creation for the
/// collar; the device itself lives outside this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollarLink {
    pub id: LinkId,
    pub collar_id: CollarId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}
