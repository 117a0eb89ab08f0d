use crate::error::ResponseError;
use crate::types::ids::{ResponseId, TaskId};
use crate::types::response::{NewResponse, Response};

pub trait ResponseRepository {
    fn add(&self, input: NewResponse) -> Result<Response, ResponseError>;
    fn get(&self, id: ResponseId) -> Result<Option<Response>, ResponseError>;
    /// Any live response for the task, regardless of confirmation state.
    fn get_for_task(&self, task_id: TaskId) -> Result<Option<Response>, ResponseError>;
    /// The confirmed response for the task, if one exists.
    fn get_confirmed(&self, task_id: TaskId) -> Result<Option<Response>, ResponseError>;
    fn confirm(&self, id: ResponseId) -> Result<bool, ResponseError>;
    /// Soft delete. Returns false when the response was already gone.
    fn remove(&self, id: ResponseId) -> Result<bool, ResponseError>;
}
