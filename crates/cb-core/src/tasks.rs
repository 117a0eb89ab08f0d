use crate::error::TaskError;
use crate::types::ids::{TaskId, UserId};
use crate::types::task::{NewTask, Task};

pub trait TaskRepository {
    fn add(&self, input: NewTask) -> Result<Task, TaskError>;
    /// Deleted tasks are invisible to reads.
    fn get(&self, id: TaskId) -> Result<Option<Task>, TaskError>;
    fn list_by_author(&self, author_id: UserId) -> Result<Vec<Task>, TaskError>;
    /// Soft delete. Returns false when the task was already gone.
    fn remove(&self, id: TaskId) -> Result<bool, TaskError>;
}
