pub mod collar;
pub mod ids;
pub mod io;
pub mod response;
pub mod task;
pub mod user;

pub use collar::CollarLink;
pub use ids::{CollarId, LinkId, ResponseId, TaskId, UserId};
pub use io::{AddResponseInput, AddTaskInput, AuthSession, LoginInput, RegisterInput};
pub use response::{NewResponse, Response};
pub use task::{NewTask, Task};
pub use user::{NewUser, StoredUser, User};
