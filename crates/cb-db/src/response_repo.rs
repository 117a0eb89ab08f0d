use crate::util::{from_rfc3339, to_rfc3339};
use cb_core::error::ResponseError;
use cb_core::responses::ResponseRepository;
use cb_core::types::ids::{ResponseId, TaskId, UserId};
use cb_core::types::response::{NewResponse, Response};
use rusqlite::Connection;

pub struct ResponseRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> ResponseRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage<E: std::fmt::Display>(err: E) -> ResponseError {
    ResponseError::Storage {
        message: err.to_string(),
    }
}

const COLUMNS: &str = "id, task_id, author_id, image_path, is_confirmed, deleted, created_at";

impl ResponseRepository for ResponseRepo<'_> {
    fn add(&self, input: NewResponse) -> Result<Response, ResponseError> {
        let now = chrono::Utc::now();
        self.conn
            .execute(
                "INSERT INTO responses (task_id, author_id, image_path, is_confirmed, deleted, created_at) \
                 VALUES (?1, ?2, ?3, 0, 0, ?4)",
                (
                    input.task_id.get(),
                    input.author_id.get(),
                    &input.image_path,
                    to_rfc3339(&now),
                ),
            )
            .map_err(storage)?;
        let id = ResponseId::new(self.conn.last_insert_rowid());

        Ok(Response {
            id,
            task_id: input.task_id,
            author_id: input.author_id,
            image_path: input.image_path,
            is_confirmed: false,
            deleted: false,
            created_at: now,
        })
    }

    fn get(&self, id: ResponseId) -> Result<Option<Response>, ResponseError> {
        let sql = format!("SELECT {COLUMNS} FROM responses WHERE id = ?1 AND deleted = 0");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_response_row(row).map(Some)
    }

    fn get_for_task(&self, task_id: TaskId) -> Result<Option<Response>, ResponseError> {
        let sql =
            format!("SELECT {COLUMNS} FROM responses WHERE task_id = ?1 AND deleted = 0 LIMIT 1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([task_id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_response_row(row).map(Some)
    }

    fn get_confirmed(&self, task_id: TaskId) -> Result<Option<Response>, ResponseError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM responses \
             WHERE task_id = ?1 AND is_confirmed = 1 AND deleted = 0 LIMIT 1"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([task_id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_response_row(row).map(Some)
    }

    fn confirm(&self, id: ResponseId) -> Result<bool, ResponseError> {
        let affected = self
            .conn
            .execute(
                "UPDATE responses SET is_confirmed = 1 WHERE id = ?1 AND deleted = 0",
                [id.get()],
            )
            .map_err(storage)?;
        Ok(affected > 0)
    }

    fn remove(&self, id: ResponseId) -> Result<bool, ResponseError> {
        let affected = self
            .conn
            .execute(
                "UPDATE responses SET deleted = 1 WHERE id = ?1 AND deleted = 0",
                [id.get()],
            )
            .map_err(storage)?;
        Ok(affected > 0)
    }
}

fn map_response_row(row: &rusqlite::Row<'_>) -> Result<Response, ResponseError> {
    let id: i64 = row.get(0).map_err(storage)?;
    let task_id: i64 = row.get(1).map_err(storage)?;
    let author_id: i64 = row.get(2).map_err(storage)?;
    let image_path: String = row.get(3).map_err(storage)?;
    let is_confirmed: bool = row.get(4).map_err(storage)?;
    let deleted: bool = row.get(5).map_err(storage)?;
    let created_at: String = row.get(6).map_err(storage)?;

    Ok(Response {
        id: ResponseId::new(id),
        task_id: TaskId::new(task_id),
        author_id: UserId::new(author_id),
        image_path,
        is_confirmed,
        deleted,
        created_at: from_rfc3339(&created_at).map_err(storage)?,
    })
}
