use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, build_board};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use cb_core::types::io::{AuthSession, LoginInput, RegisterInput};
use cb_core::types::user::User;
use utoipa::IntoParams;

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct UserQuery {
    user_token: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/get_user", get(get_user))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterInput,
    responses((status = 200, body = AuthSession))
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<RegisterInput>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.users().register(input) {
        Ok(session) => Json(session).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginInput,
    responses((status = 200, body = AuthSession))
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<LoginInput>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.users().login(input) {
        Ok(session) => Json(session).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/get_user",
    params(UserQuery),
    responses((status = 200, body = User))
)]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<UserQuery>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.users().get(&query.user_token) {
        Ok(user) => Json(user).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
