pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use cb_core::{Board, BoardConfig, BoardError};
use cb_db::DbStore;
use cb_db::schema;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
    pub admin_token: String,
}

/// Each request gets its own connection; migrations are idempotent so this
/// also keeps the schema current for databases created by older builds.
pub fn build_board(state: &AppState) -> Result<Board<DbStore>, BoardError> {
    let conn = schema::open_and_migrate(&state.db_path).map_err(|err| BoardError::Internal {
        message: err.to_string(),
    })?;
    let store = DbStore::new(conn);
    Ok(Board::new(
        store,
        BoardConfig {
            admin_token: state.admin_token.clone(),
        },
    ))
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(state)).await
}
