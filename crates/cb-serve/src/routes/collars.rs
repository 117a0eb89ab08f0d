use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, build_board};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use cb_core::types::collar::CollarLink;
use cb_core::types::ids::CollarId;
use utoipa::ToSchema;

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct LinkCollarRequest {
    user_token: String,
    collar_id: CollarId,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/collars/link_collar", post(link_collar))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/collars/link_collar",
    request_body = LinkCollarRequest,
    responses((status = 200, body = CollarLink))
)]
pub(crate) async fn link_collar(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(request): Json<LinkCollarRequest>,
) -> Response {
    let board = match build_board(&state) {
        Ok(board) => board,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match board.collars().link(&request.user_token, request.collar_id) {
        Ok(link) => Json(link).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
