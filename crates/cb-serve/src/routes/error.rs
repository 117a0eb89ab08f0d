use axum::Json;
use axum::http::StatusCode;
use cb_core::error::{BoardError, CollarError, ResponseError, TaskError, UserError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

/// Every business-rule failure answers 404 with a stable code; only storage
/// faults surface as 500.
pub fn map_error(
    err: &BoardError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        BoardError::User(user) => map_user_error(user),
        BoardError::Collar(collar) => map_collar_error(collar),
        BoardError::Task(task) => map_task_error(task),
        BoardError::Response(response) => map_response_error(response),
        BoardError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            message.clone(),
        ),
    };

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_user_error(err: &UserError) -> (StatusCode, &'static str, String) {
    match err {
        UserError::UserExists { .. } => (StatusCode::NOT_FOUND, "user_exists", err.to_string()),
        UserError::WrongAdminToken { .. } => {
            (StatusCode::NOT_FOUND, "wrong_admin_token", err.to_string())
        }
        UserError::WrongPassword { .. } => {
            (StatusCode::NOT_FOUND, "wrong_password", err.to_string())
        }
        UserError::NoUser { .. } => (StatusCode::NOT_FOUND, "no_user", err.to_string()),
        UserError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_collar_error(err: &CollarError) -> (StatusCode, &'static str, String) {
    match err {
        CollarError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_task_error(err: &TaskError) -> (StatusCode, &'static str, String) {
    match err {
        TaskError::UnlinkedCollar { .. } => {
            (StatusCode::NOT_FOUND, "unlinked_collar", err.to_string())
        }
        TaskError::TooShortText => (StatusCode::NOT_FOUND, "too_short_text", err.to_string()),
        TaskError::NotUsersTask { .. } => {
            (StatusCode::NOT_FOUND, "not_users_task", err.to_string())
        }
        TaskError::TaskHasResponses { .. } => {
            (StatusCode::NOT_FOUND, "task_has_responses", err.to_string())
        }
        TaskError::NoTask { .. } => (StatusCode::NOT_FOUND, "no_task", err.to_string()),
        TaskError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_response_error(err: &ResponseError) -> (StatusCode, &'static str, String) {
    match err {
        ResponseError::UserIsAuthorOfTask { .. } => (
            StatusCode::NOT_FOUND,
            "user_is_author_of_task",
            err.to_string(),
        ),
        ResponseError::UserIsNotAuthor { .. } => {
            (StatusCode::NOT_FOUND, "user_is_not_author", err.to_string())
        }
        ResponseError::ResponseAlreadyConfirmed { .. } => (
            StatusCode::NOT_FOUND,
            "response_already_confirmed",
            err.to_string(),
        ),
        ResponseError::TaskHasConfirmedResponse { .. } => (
            StatusCode::NOT_FOUND,
            "task_has_confirmed_response",
            err.to_string(),
        ),
        ResponseError::NotUsersResponse { .. } => (
            StatusCode::NOT_FOUND,
            "not_users_response",
            err.to_string(),
        ),
        ResponseError::NoResponse { .. } => {
            (StatusCode::NOT_FOUND, "no_response", err.to_string())
        }
        ResponseError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::types::{CollarId, TaskId};

    #[test]
    fn business_failures_map_to_404() {
        let err = BoardError::Task(TaskError::UnlinkedCollar {
            collar_id: CollarId::new(3),
        });
        let (status, Json(body)) = map_error(&err, Some("corr_1".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "unlinked_collar");
        assert_eq!(body.correlation_id.as_deref(), Some("corr_1"));
    }

    #[test]
    fn storage_failures_map_to_500() {
        let err = BoardError::Response(ResponseError::Storage {
            message: "disk full".to_string(),
        });
        let (status, Json(body)) = map_error(&err, None);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_error");
    }

    #[test]
    fn messages_carry_the_offending_ids() {
        let err = BoardError::Task(TaskError::NoTask {
            task_id: TaskId::new(42),
        });
        let (_, Json(body)) = map_error(&err, None);
        assert!(body.message.contains("42"));
    }
}
