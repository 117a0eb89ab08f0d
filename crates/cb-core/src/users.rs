use crate::error::UserError;
use crate::types::ids::UserId;
use crate::types::user::{NewUser, StoredUser, User};

pub trait UserRepository {
    fn create(&self, input: NewUser) -> Result<StoredUser, UserError>;
    fn get(&self, id: UserId) -> Result<Option<User>, UserError>;
    fn get_by_login(&self, login: &str) -> Result<Option<StoredUser>, UserError>;
    fn get_by_token(&self, token: &str) -> Result<Option<User>, UserError>;
    fn set_token(&self, id: UserId, token: &str) -> Result<(), UserError>;
}
