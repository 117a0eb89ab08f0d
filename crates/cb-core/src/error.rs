use crate::types::ids::{CollarId, ResponseId, TaskId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user with login '{login}' already exists")]
    UserExists { login: String },
    #[error("entered wrong admin-token '{token}'")]
    WrongAdminToken { token: String },
    #[error("entered wrong password for login '{login}'")]
    WrongPassword { login: String },
    #[error("no user with login '{login}'")]
    NoUser { login: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum CollarError {
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("no linked collar with id '{collar_id}'")]
    UnlinkedCollar { collar_id: CollarId },
    #[error("task text is too short")]
    TooShortText,
    #[error("task '{task_id}' does not belong to user")]
    NotUsersTask { task_id: TaskId },
    #[error("task '{task_id}' has responses")]
    TaskHasResponses { task_id: TaskId },
    #[error("no task with id '{task_id}'")]
    NoTask { task_id: TaskId },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("user is author of task '{task_id}'")]
    UserIsAuthorOfTask { task_id: TaskId },
    #[error("user '{author_id}' is not author of task '{task_id}' for response '{response_id}'")]
    UserIsNotAuthor {
        author_id: UserId,
        response_id: ResponseId,
        task_id: TaskId,
    },
    #[error("response '{response_id}' is already confirmed")]
    ResponseAlreadyConfirmed { response_id: ResponseId },
    #[error("task '{task_id}' already has confirmed response '{response_id}'")]
    TaskHasConfirmedResponse {
        task_id: TaskId,
        response_id: ResponseId,
    },
    #[error("response '{response_id}' does not belong to user")]
    NotUsersResponse { response_id: ResponseId },
    #[error("no response with id '{response_id}'")]
    NoResponse { response_id: ResponseId },
    #[error("storage error: {message}")]
    Storage { message: String },
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Collar(#[from] CollarError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
