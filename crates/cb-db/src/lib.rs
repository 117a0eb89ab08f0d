pub mod collar_repo;
pub mod response_repo;
pub mod schema;
pub mod store;
pub mod task_repo;
pub mod user_repo;
pub mod util;

pub use crate::store::DbStore;
