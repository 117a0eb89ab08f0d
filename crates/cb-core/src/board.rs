use crate::auth::{hash_password, new_token};
use crate::collars::CollarRepository;
use crate::error::{BoardError, ResponseError, TaskError, UserError};
use crate::responses::ResponseRepository;
use crate::store::Store;
use crate::tasks::TaskRepository;
use crate::types::collar::CollarLink;
use crate::types::ids::{CollarId, ResponseId, TaskId, UserId};
use crate::types::io::{AddResponseInput, AddTaskInput, AuthSession, LoginInput, RegisterInput};
use crate::types::response::{NewResponse, Response};
use crate::types::task::{NewTask, Task};
use crate::types::user::{NewUser, User};
use crate::users::UserRepository;
use crate::validation::validate_task_text;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Token that must accompany a registration for the user to become admin.
    pub admin_token: String,
}

/// Facade over the task-board workflow. Every mutating operation resolves the
/// acting user from its token, applies the ordered business checks, and only
/// then writes, all inside one transaction scope.
pub struct Board<S: Store> {
    store: S,
    config: BoardConfig,
}

impl<S: Store> Board<S> {
    pub fn new(store: S, config: BoardConfig) -> Self {
        Self { store, config }
    }

    pub fn users(&self) -> UsersApi<'_, S> {
        UsersApi { core: self }
    }

    pub fn collars(&self) -> CollarsApi<'_, S> {
        CollarsApi { core: self }
    }

    pub fn tasks(&self) -> TasksApi<'_, S> {
        TasksApi { core: self }
    }

    pub fn responses(&self) -> ResponsesApi<'_, S> {
        ResponsesApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn authenticate(store: &S, token: &str) -> Result<User, BoardError> {
        let user = store.users().get_by_token(token)?;
        let Some(user) = user else {
            error!(token, "NoUser: unknown token");
            return Err(UserError::NoUser {
                login: token.to_string(),
            }
            .into());
        };
        Ok(user)
    }
}

pub struct UsersApi<'a, S: Store> {
    core: &'a Board<S>,
}

impl<'a, S: Store> UsersApi<'a, S> {
    pub fn register(&self, input: RegisterInput) -> Result<AuthSession, BoardError> {
        info!(login = %input.login, "called /users/register");
        self.core.store.with_tx(|store| {
            if store.users().get_by_login(&input.login)?.is_some() {
                error!(login = %input.login, "UserExists");
                return Err(UserError::UserExists { login: input.login }.into());
            }

            let is_admin = match &input.admin_token {
                Some(token) if *token == self.core.config.admin_token => true,
                Some(token) => {
                    error!(token, "WrongAdminToken");
                    return Err(UserError::WrongAdminToken {
                        token: token.clone(),
                    }
                    .into());
                }
                None => false,
            };

            let token = new_token();
            let stored = store.users().create(NewUser {
                login: input.login,
                password_hash: hash_password(&input.password),
                token: token.clone(),
                is_admin,
            })?;

            Ok(AuthSession {
                user: stored.user,
                token,
            })
        })
    }

    pub fn login(&self, input: LoginInput) -> Result<AuthSession, BoardError> {
        info!(login = %input.login, "called /users/login");
        self.core.store.with_tx(|store| {
            let stored = store.users().get_by_login(&input.login)?;
            let Some(stored) = stored else {
                error!(login = %input.login, "NoUser");
                return Err(UserError::NoUser { login: input.login }.into());
            };

            if stored.password_hash != hash_password(&input.password) {
                error!(login = %input.login, "WrongPassword");
                return Err(UserError::WrongPassword { login: input.login }.into());
            }

            // Rotate the token on every login.
            let token = new_token();
            store.users().set_token(stored.user.id, &token)?;

            Ok(AuthSession {
                user: stored.user,
                token,
            })
        })
    }

    pub fn get(&self, token: &str) -> Result<User, BoardError> {
        info!("called /users/get_user");
        Board::authenticate(&self.core.store, token)
    }
}

pub struct CollarsApi<'a, S: Store> {
    core: &'a Board<S>,
}

impl<'a, S: Store> CollarsApi<'a, S> {
    pub fn link(&self, token: &str, collar_id: CollarId) -> Result<CollarLink, BoardError> {
        info!(%collar_id, "called /collars/link_collar");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;
            let link = store.collars().link(collar_id, user.id)?;
            Ok(link)
        })
    }
}

pub struct TasksApi<'a, S: Store> {
    core: &'a Board<S>,
}

impl<'a, S: Store> TasksApi<'a, S> {
    pub fn add(&self, token: &str, input: AddTaskInput) -> Result<Task, BoardError> {
        info!(collar_id = %input.collar_id, "called /tasks/add_task");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;

            let link = store.collars().get_link(input.collar_id)?;
            if link.is_none() {
                error!(collar_id = %input.collar_id, "UnlinkedCollar");
                return Err(TaskError::UnlinkedCollar {
                    collar_id: input.collar_id,
                }
                .into());
            }

            if let Err(err) = validate_task_text(&input.text) {
                error!("TooShortText");
                return Err(err.into());
            }

            let task = store.tasks().add(NewTask {
                collar_id: input.collar_id,
                author_id: user.id,
                text: input.text,
            })?;
            Ok(task)
        })
    }

    pub fn remove(&self, token: &str, task_id: TaskId) -> Result<bool, BoardError> {
        info!(%task_id, "called /tasks/remove_task");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;

            let task = store.tasks().get(task_id)?;
            let Some(task) = task else {
                error!(%task_id, "NoTask");
                return Err(TaskError::NoTask { task_id }.into());
            };

            if task.author_id != user.id {
                error!(%task_id, "NotUsersTask");
                return Err(TaskError::NotUsersTask { task_id }.into());
            }

            if store.responses().get_for_task(task_id)?.is_some() {
                error!(%task_id, "TaskHasResponses");
                return Err(TaskError::TaskHasResponses { task_id }.into());
            }

            let removed = store.tasks().remove(task_id)?;
            Ok(removed)
        })
    }

    pub fn get(&self, task_id: TaskId) -> Result<Task, BoardError> {
        info!(%task_id, "called /tasks/get_task");
        let task = self.core.store.tasks().get(task_id)?;
        let Some(task) = task else {
            error!(%task_id, "NoTask");
            return Err(TaskError::NoTask { task_id }.into());
        };
        Ok(task)
    }

    pub fn list_by_author(&self, author_id: UserId) -> Result<Vec<Task>, BoardError> {
        info!(%author_id, "called /tasks/get_tasks");
        let tasks = self.core.store.tasks().list_by_author(author_id)?;
        Ok(tasks)
    }
}

pub struct ResponsesApi<'a, S: Store> {
    core: &'a Board<S>,
}

impl<'a, S: Store> ResponsesApi<'a, S> {
    pub fn add(&self, token: &str, input: AddResponseInput) -> Result<Response, BoardError> {
        info!(task_id = %input.task_id, "called /tasks/add_response");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;

            let task = store.tasks().get(input.task_id)?;
            let Some(task) = task else {
                error!(task_id = %input.task_id, "NoTask");
                return Err(TaskError::NoTask {
                    task_id: input.task_id,
                }
                .into());
            };

            if user.id == task.author_id {
                error!(task_id = %task.id, "UserIsAuthorOfTask");
                return Err(ResponseError::UserIsAuthorOfTask { task_id: task.id }.into());
            }

            let response = store.responses().add(NewResponse {
                task_id: task.id,
                author_id: user.id,
                image_path: input.image_path,
            })?;
            Ok(response)
        })
    }

    pub fn confirm(&self, token: &str, response_id: ResponseId) -> Result<bool, BoardError> {
        info!(%response_id, "called /tasks/confirm_response");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;

            let response = store.responses().get(response_id)?;
            let Some(response) = response else {
                error!(%response_id, "NoResponse");
                return Err(ResponseError::NoResponse { response_id }.into());
            };

            let task = store.tasks().get(response.task_id)?;
            let Some(task) = task else {
                error!(task_id = %response.task_id, "NoTask");
                return Err(TaskError::NoTask {
                    task_id: response.task_id,
                }
                .into());
            };

            if user.id != task.author_id {
                error!(author_id = %task.author_id, %response_id, task_id = %task.id, "UserIsNotAuthor");
                return Err(ResponseError::UserIsNotAuthor {
                    author_id: task.author_id,
                    response_id,
                    task_id: task.id,
                }
                .into());
            }

            if let Some(confirmed) = store.responses().get_confirmed(task.id)? {
                if confirmed.id == response_id {
                    error!(%response_id, "ResponseAlreadyConfirmed");
                    return Err(ResponseError::ResponseAlreadyConfirmed { response_id }.into());
                }
                error!(task_id = %task.id, confirmed_id = %confirmed.id, "TaskHasConfirmedResponse");
                return Err(ResponseError::TaskHasConfirmedResponse {
                    task_id: task.id,
                    response_id: confirmed.id,
                }
                .into());
            }

            let confirmed = store.responses().confirm(response_id)?;
            Ok(confirmed)
        })
    }

    pub fn remove(&self, token: &str, response_id: ResponseId) -> Result<bool, BoardError> {
        info!(%response_id, "called /tasks/remove_response");
        self.core.store.with_tx(|store| {
            let user = Board::authenticate(store, token)?;

            let response = store.responses().get(response_id)?;
            let Some(response) = response else {
                error!(%response_id, "NoResponse");
                return Err(ResponseError::NoResponse { response_id }.into());
            };

            if user.id != response.author_id {
                error!(%response_id, "NotUsersResponse");
                return Err(ResponseError::NotUsersResponse { response_id }.into());
            }

            let removed = store.responses().remove(response_id)?;
            Ok(removed)
        })
    }

    pub fn get(&self, response_id: ResponseId) -> Result<Response, BoardError> {
        info!(%response_id, "called /tasks/get_response");
        let response = self.core.store.responses().get(response_id)?;
        let Some(response) = response else {
            error!(%response_id, "NoResponse");
            return Err(ResponseError::NoResponse { response_id }.into());
        };
        Ok(response)
    }
}
