use crate::util::{from_rfc3339, to_rfc3339};
use cb_core::error::UserError;
use cb_core::types::ids::UserId;
use cb_core::types::user::{NewUser, StoredUser, User};
use cb_core::users::UserRepository;
use rusqlite::Connection;

pub struct UserRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn storage<E: std::fmt::Display>(err: E) -> UserError {
    UserError::Storage {
        message: err.to_string(),
    }
}

const COLUMNS: &str = "id, login, password_hash, token, is_admin, created_at";

impl UserRepository for UserRepo<'_> {
    fn create(&self, input: NewUser) -> Result<StoredUser, UserError> {
        let now = chrono::Utc::now();
        self.conn
            .execute(
                "INSERT INTO users (login, password_hash, token, is_admin, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (
                    &input.login,
                    &input.password_hash,
                    &input.token,
                    input.is_admin,
                    to_rfc3339(&now),
                ),
            )
            .map_err(storage)?;
        let id = UserId::new(self.conn.last_insert_rowid());

        Ok(StoredUser {
            user: User {
                id,
                login: input.login,
                is_admin: input.is_admin,
                created_at: now,
            },
            password_hash: input.password_hash,
            token: input.token,
        })
    }

    fn get(&self, id: UserId) -> Result<Option<User>, UserError> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([id.get()]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_user_row(row).map(|stored| Some(stored.user))
    }

    fn get_by_login(&self, login: &str) -> Result<Option<StoredUser>, UserError> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE login = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([login]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_user_row(row).map(Some)
    }

    fn get_by_token(&self, token: &str) -> Result<Option<User>, UserError> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE token = ?1");
        let mut stmt = self.conn.prepare(&sql).map_err(storage)?;
        let mut rows = stmt.query([token]).map_err(storage)?;
        let Some(row) = rows.next().map_err(storage)? else {
            return Ok(None);
        };
        map_user_row(row).map(|stored| Some(stored.user))
    }

    fn set_token(&self, id: UserId, token: &str) -> Result<(), UserError> {
        let affected = self
            .conn
            .execute(
                "UPDATE users SET token = ?2 WHERE id = ?1",
                (id.get(), token),
            )
            .map_err(storage)?;
        if affected == 0 {
            return Err(UserError::NoUser {
                login: id.to_string(),
            });
        }
        Ok(())
    }
}

fn map_user_row(row: &rusqlite::Row<'_>) -> Result<StoredUser, UserError> {
    let id: i64 = row.get(0).map_err(storage)?;
    let login: String = row.get(1).map_err(storage)?;
    let password_hash: String = row.get(2).map_err(storage)?;
    let token: String = row.get(3).map_err(storage)?;
    let is_admin: bool = row.get(4).map_err(storage)?;
    let created_at: String = row.get(5).map_err(storage)?;

    Ok(StoredUser {
        user: User {
            id: UserId::new(id),
            login,
            is_admin,
            created_at: from_rfc3339(&created_at).map_err(storage)?,
        },
        password_hash,
        token,
    })
}
