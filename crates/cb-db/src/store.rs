use cb_core::error::BoardError;
use cb_core::store::Store;
use rusqlite::Connection;

use crate::collar_repo::CollarRepo;
use crate::response_repo::ResponseRepo;
use crate::task_repo::TaskRepo;
use crate::user_repo::UserRepo;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn internal(err: rusqlite::Error) -> BoardError {
    BoardError::Internal {
        message: err.to_string(),
    }
}

impl Store for DbStore {
    type Users<'a>
        = UserRepo<'a>
    where
        Self: 'a;
    type Collars<'a>
        = CollarRepo<'a>
    where
        Self: 'a;
    type Tasks<'a>
        = TaskRepo<'a>
    where
        Self: 'a;
    type Responses<'a>
        = ResponseRepo<'a>
    where
        Self: 'a;

    fn users(&self) -> Self::Users<'_> {
        UserRepo::new(&self.conn)
    }

    fn collars(&self) -> Self::Collars<'_> {
        CollarRepo::new(&self.conn)
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        TaskRepo::new(&self.conn)
    }

    fn responses(&self) -> Self::Responses<'_> {
        ResponseRepo::new(&self.conn)
    }

    fn with_tx<F, T>(&self, f: F) -> Result<T, BoardError>
    where
        F: FnOnce(&Self) -> Result<T, BoardError>,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE").map_err(internal)?;
        let result = f(self);
        match result {
            Ok(value) => {
                self.conn.execute_batch("COMMIT").map_err(internal)?;
                Ok(value)
            }
            Err(err) => {
                self.conn.execute_batch("ROLLBACK").map_err(internal)?;
                Err(err)
            }
        }
    }
}
