use utoipa::OpenApi;

use crate::routes::collars::LinkCollarRequest;
use crate::routes::tasks::{
    AddResponseRequest, AddTaskRequest, ConfirmResponseRequest, RemoveResponseRequest,
    RemoveTaskRequest,
};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cb_core::types::collar::CollarLink;
use cb_core::types::ids::{CollarId, LinkId, ResponseId, TaskId, UserId};
use cb_core::types::io::{AddResponseInput, AddTaskInput, AuthSession, LoginInput, RegisterInput};
use cb_core::types::response::Response;
use cb_core::types::task::Task;
use cb_core::types::user::User;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::users::register,
        crate::routes::users::login,
        crate::routes::users::get_user,
        crate::routes::collars::link_collar,
        crate::routes::tasks::add_task,
        crate::routes::tasks::get_task,
        crate::routes::tasks::get_tasks,
        crate::routes::tasks::remove_task,
        crate::routes::tasks::add_response,
        crate::routes::tasks::get_response,
        crate::routes::tasks::confirm_response,
        crate::routes::tasks::remove_response
    ),
    components(schemas(
        User,
        AuthSession,
        RegisterInput,
        LoginInput,
        CollarLink,
        LinkCollarRequest,
        Task,
        AddTaskInput,
        AddTaskRequest,
        RemoveTaskRequest,
        Response,
        AddResponseInput,
        AddResponseRequest,
        ConfirmResponseRequest,
        RemoveResponseRequest,
        UserId,
        CollarId,
        LinkId,
        TaskId,
        ResponseId
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn ensure_initialized() {
    let _ = ApiDoc::openapi();
}

pub fn router() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
