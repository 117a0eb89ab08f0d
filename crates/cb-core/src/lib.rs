pub mod auth;
pub mod board;
pub mod collars;
pub mod error;
pub mod responses;
pub mod store;
pub mod tasks;
pub mod users;
pub mod validation;

pub mod types;

pub use crate::board::{Board, BoardConfig};
pub use crate::error::BoardError;
pub use crate::store::Store;
