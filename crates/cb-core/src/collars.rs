use crate::error::CollarError;
use crate::types::collar::CollarLink;
use crate::types::ids::{CollarId, UserId};

pub trait CollarRepository {
    fn link(&self, collar_id: CollarId, user_id: UserId) -> Result<CollarLink, CollarError>;
    fn get_link(&self, collar_id: CollarId) -> Result<Option<CollarLink>, CollarError>;
}
