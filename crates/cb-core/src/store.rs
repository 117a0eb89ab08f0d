use crate::collars::CollarRepository;
use crate::responses::ResponseRepository;
use crate::tasks::TaskRepository;
use crate::users::UserRepository;
use crate::BoardError;

pub trait Store {
    type Users<'a>: UserRepository
    where
        Self: 'a;
    type Collars<'a>: CollarRepository
    where
        Self: 'a;
    type Tasks<'a>: TaskRepository
    where
        Self: 'a;
    type Responses<'a>: ResponseRepository
    where
        Self: 'a;

    fn users(&self) -> Self::Users<'_>;
    fn collars(&self) -> Self::Collars<'_>;
    fn tasks(&self) -> Self::Tasks<'_>;
    fn responses(&self) -> Self::Responses<'_>;

    /// Runs `f` inside one transaction scope, committed on success and rolled
    /// back on any error.
    fn with_tx<F, T>(&self, f: F) -> Result<T, BoardError>
    where
        F: FnOnce(&Self) -> Result<T, BoardError>;
}
