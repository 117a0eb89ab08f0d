use crate::util::{from_rfc3339, to_rfc3339};
use cb_core::collars::CollarRepository;
use cb_core::error::CollarError;
use cb_core::types::collar::CollarLink;
use cb_core::types::ids::{CollarId, LinkId, UserId};
use rusqlite::Connection;

pub struct CollarRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> CollarRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage<E: std::fmt::Display>(err: E) -> CollarError {
    CollarError::Storage {
        message: err.to_string(),
    }
}

impl CollarRepository for CollarRepo<'_> {
    fn link(&self, collar_id: CollarId, user_id: UserId) -> Result<CollarLink, CollarError> {
        let now = chrono::Utc::now();
        self.conn
            .execute(
                "INSERT INTO collar_links (collar_id, user_id, created_at) VALUES (?1, ?2, ?3)",
                (collar_id.get(), user_id.get(), to_rfc3339(&now)),
            )
            .map_err(storage)?;
        let id = LinkId::new(self.conn.last_insert_rowid());

        Ok(CollarLink {
            id,
            collar_id,
            user_id,
            created_at: now,
        })
    }

    fn get_link(&self, collar_id: CollarId) -> Result<Option<CollarLink>, CollarError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, collar_id, user_id, created_at FROM collar_links \
                 WHERE collar_id = ?1 LIMIT 1",
            )
            .map_err(storage)?;
        let mut rows = stmt.query([collar_id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_link_row(row).map(Some)
    }
}

fn map_link_row(row: &rusqlite::Row<'_>) -> Result<CollarLink, CollarError> {
    let id: i64 = row.get(0).map_err(storage)?;
    let collar_id: i64 = row.get(1).map_err(storage)?;
    let user_id: i64 = row.get(2).map_err(storage)?;
    let created_at: String = row.get(3).map_err(storage)?;

    Ok(CollarLink {
        id: LinkId::new(id),
        collar_id: CollarId::new(collar_id),
        user_id: UserId::new(user_id),
        created_at: from_rfc3339(&created_at).map_err(storage)?,
    })
}
