use crate::util::{from_rfc3339, to_rfc3339};
use cb_core::error::TaskError;
use cb_core::tasks::TaskRepository;
use cb_core::types::ids::{CollarId, TaskId, UserId};
use cb_core::types::task::{NewTask, Task};
use rusqlite::Connection;

pub struct TaskRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> TaskRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage<E: std::fmt::Display>(err: E) -> TaskError {
    TaskError::Storage {
        message: err.to_string(),
    }
}

const COLUMNS: &str = "id, collar_id, author_id, text, deleted, created_at";

impl TaskRepository for TaskRepo<'_> {
    fn add(&self, input: NewTask) -> Result<Task, TaskError> {
        let now = chrono::Utc::now();
        self.conn
            .execute(
                "INSERT INTO tasks (collar_id, author_id, text, deleted, created_at) \
                 VALUES (?1, ?2, ?3, 0, ?4)",
                (
                    input.collar_id.get(),
                    input.author_id.get(),
                    &input.text,
                    to_rfc3339(&now),
                ),
            )
            .map_err(storage)?;
        let id = TaskId::new(self.conn.last_insert_rowid());

        Ok(Task {
            id,
            collar_id: input.collar_id,
            author_id: input.author_id,
            text: input.text,
            deleted: false,
            created_at: now,
        })
    }

    fn get(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        let sql = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1 AND deleted = 0");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_task_row(row).map(Some)
    }

    fn list_by_author(&self, author_id: UserId) -> Result<Vec<Task>, TaskError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM tasks WHERE author_id = ?1 AND deleted = 0 ORDER BY id ASC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([author_id.get()]).map_err(storage)?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            tasks.push(map_task_row(row)?);
        }
        Ok(tasks)
    }

    fn remove(&self, id: TaskId) -> Result<bool, TaskError> {
        let affected = self
            .conn
            .execute(
                "UPDATE tasks SET deleted = 1 WHERE id = ?1 AND deleted = 0",
                [id.get()],
            )
            .map_err(storage)?;
        Ok(affected > 0)
    }
}

fn map_task_row(row: &rusqlite::Row<'_>) -> Result<Task, TaskError> {
    let id: i64 = row.get(0).map_err(storage)?;
    let collar_id: i64 = row.get(1).map_err(storage)?;
    let author_id: i64 = row.get(2).map_err(storage)?;
    let text: String = row.get(3).map_err(storage)?;
    let deleted: bool = row.get(4).map_err(storage)?;
    let created_at: String = row.get(5).map_err(storage)?;

    Ok(Task {
        id: TaskId::new(id),
        collar_id: CollarId::new(collar_id),
        author_id: UserId::new(author_id),
        text,
        deleted,
        created_at: from_rfc3339(&created_at).map_err(storage)?,
    })
}
