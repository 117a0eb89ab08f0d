use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, build_board};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use cb_core::types::ids::{CollarId, ResponseId, TaskId, UserId};
use cb_core::types::io::{AddResponseInput, AddTaskInput};
use cb_core::types::response::Response as TaskResponse;
use cb_core::types::task::Task;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct AddTaskRequest {
    user_token: String,
    collar_id: CollarId,
    text: String,
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct RemoveTaskRequest {
    user_token: String,
    task_id: TaskId,
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct AddResponseRequest {
    user_token: String,
    task_id: TaskId,
    image_path: String,
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct ConfirmResponseRequest {
    user_token: String,
    response_id: ResponseId,
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct RemoveResponseRequest {
    user_token: String,
    response_id: ResponseId,
}

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct TaskQuery {
    task_id: TaskId,
}

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct TasksQuery {
    author_id: UserId,
}

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct ResponseQuery {
    response_id: ResponseId,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks/add_task", post(add_task))
        .route("/tasks/get_task", get(get_task))
        .route("/tasks/get_tasks", get(get_tasks))
        .route("/tasks/remove_task", post(remove_task))
        .route("/tasks/add_response", post(add_response))
        .route("/tasks/get_response", get(get_response))
        .route("/tasks/confirm_response", post(confirm_response))
        .route("/tasks/remove_response", post(remove_response))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/tasks/add_task",
    request_body = AddTaskRequest,
    responses((status = 200, description = "Id of the created task"))
)]
pub(crate) async fn add_task(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<AddTaskRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let input = AddTaskInput {
        collar_id: request.collar_id,
        text: request.text,
    };
    match board.tasks().add(&request.user_token, input) {
        Ok(task) => Json(json!({ "id": task.id })).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/get_task",
    params(TaskQuery),
    responses((status = 200, body = Task))
)]
pub(crate) async fn get_task(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<TaskQuery>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.tasks().get(query.task_id) {
        Ok(task) => Json(task).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/get_tasks",
    params(TasksQuery),
    responses((status = 200, body = Vec<Task>))
)]
pub(crate) async fn get_tasks(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<TasksQuery>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.tasks().list_by_author(query.author_id) {
        Ok(tasks) => Json(tasks).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks/remove_task",
    request_body = RemoveTaskRequest,
    responses((status = 200, description = "Whether the task was deleted"))
)]
pub(crate) async fn remove_task(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<RemoveTaskRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.tasks().remove(&request.user_token, request.task_id) {
        Ok(removed) => Json(json!({ "ok": removed })).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks/add_response",
    request_body = AddResponseRequest,
    responses((status = 200, body = TaskResponse))
)]
pub(crate) async fn add_response(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<AddResponseRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let input = AddResponseInput {
        task_id: request.task_id,
        image_path: request.image_path,
    };
    match board.responses().add(&request.user_token, input) {
        Ok(response) => Json(response).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/tasks/get_response",
    params(ResponseQuery),
    responses((status = 200, body = TaskResponse))
)]
pub(crate) async fn get_response(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<ResponseQuery>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.responses().get(query.response_id) {
        Ok(response) => Json(response).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks/confirm_response",
    request_body = ConfirmResponseRequest,
    responses((status = 200, description = "Whether the response was confirmed"))
)]
pub(crate) async fn confirm_response(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<ConfirmResponseRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board
        .responses()
        .confirm(&request.user_token, request.response_id)
    {
        Ok(confirmed) => Json(json!({ "ok": confirmed })).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks/remove_response",
    request_body = RemoveResponseRequest,
    responses((status = 200, description = "Whether the response was deleted"))
)]
pub(crate) async fn remove_response(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<RemoveResponseRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board
        .responses()
        .remove(&request.user_token, request.response_id)
    {
        Ok(removed) => Json(json!({ "ok": removed })).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
