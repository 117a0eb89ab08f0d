use crate::types::ids::{ResponseId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Response {
    pub id: ResponseId,
    pub task_id: TaskId,
    pub author_id: UserId,
    pub image_path: String,
    pub is_confirmed: bool,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub task_id: TaskId,
    pub author_id: UserId,
    pub image_path: String,
}
