use cb_core::board::{Board, BoardConfig};
use cb_core::error::{BoardError, ResponseError, TaskError, UserError};
use cb_core::types::io::{AddResponseInput, AddTaskInput, AuthSession, LoginInput, RegisterInput};
use cb_core::types::{CollarId, Task, TaskId, UserId};
use cb_db::DbStore;
use cb_db::schema::with_test_db;

const ADMIN_TOKEN: &str = "super-secret";

fn test_board() -> Board<DbStore> {
    let conn = with_test_db().unwrap();
    Board::new(
        DbStore::new(conn),
        BoardConfig {
            admin_token: ADMIN_TOKEN.to_string(),
        },
    )
}

fn register(board: &Board<DbStore>, login: &str) -> AuthSession {
    board
        .users()
        .register(RegisterInput {
            login: login.to_string(),
            password: "password123".to_string(),
            admin_token: None,
        })
        .unwrap()
}

fn add_linked_task(board: &Board<DbStore>, session: &AuthSession, collar: i64, text: &str) -> Task {
    board
        .collars()
        .link(&session.token, CollarId::new(collar))
        .unwrap();
    board
        .tasks()
        .add(
            &session.token,
            AddTaskInput {
                collar_id: CollarId::new(collar),
                text: text.to_string(),
            },
        )
        .unwrap()
}

#[test]
fn register_then_login_rotates_token() {
    let board = test_board();
    let session = register(&board, "alice");
    assert!(!session.user.is_admin);

    let fetched = board.users().get(&session.token).unwrap();
    assert_eq!(fetched.id, session.user.id);

    let relogged = board
        .users()
        .login(LoginInput {
            login: "alice".to_string(),
            password: "password123".to_string(),
        })
        .unwrap();
    assert_ne!(relogged.token, session.token);

    // The old token is dead after rotation.
    assert!(matches!(
        board.users().get(&session.token),
        Err(BoardError::User(UserError::NoUser { .. }))
    ));
    assert_eq!(
        board.users().get(&relogged.token).unwrap().id,
        session.user.id
    );
}

#[test]
fn duplicate_register_fails() {
    let board = test_board();
    register(&board, "alice");

    let err = board
        .users()
        .register(RegisterInput {
            login: "alice".to_string(),
            password: "other-password".to_string(),
            admin_token: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::User(UserError::UserExists { login }) if login == "alice"
    ));
}

#[test]
fn login_failures() {
    let board = test_board();
    register(&board, "alice");

    let err = board
        .users()
        .login(LoginInput {
            login: "alice".to_string(),
            password: "nope".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::User(UserError::WrongPassword { login }) if login == "alice"
    ));

    let err = board
        .users()
        .login(LoginInput {
            login: "bob".to_string(),
            password: "password123".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::User(UserError::NoUser { login }) if login == "bob"
    ));
}

#[test]
fn admin_registration_checks_admin_token() {
    let board = test_board();

    let err = board
        .users()
        .register(RegisterInput {
            login: "mallory".to_string(),
            password: "password123".to_string(),
            admin_token: Some("guess".to_string()),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::User(UserError::WrongAdminToken { token }) if token == "guess"
    ));

    let session = board
        .users()
        .register(RegisterInput {
            login: "root".to_string(),
            password: "password123".to_string(),
            admin_token: Some(ADMIN_TOKEN.to_string()),
        })
        .unwrap();
    assert!(session.user.is_admin);
}

#[test]
fn unknown_token_is_rejected_before_any_check() {
    let board = test_board();
    let err = board
        .tasks()
        .add(
            "tok_bogus",
            AddTaskInput {
                collar_id: CollarId::new(1),
                text: "hello world".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, BoardError::User(UserError::NoUser { .. })));
}

#[test]
fn add_task_requires_linked_collar() {
    let board = test_board();
    let session = register(&board, "alice");

    // The collar check runs before the text check, so even a short text
    // surfaces UnlinkedCollar here.
    let err = board
        .tasks()
        .add(
            &session.token,
            AddTaskInput {
                collar_id: CollarId::new(9),
                text: "short".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::UnlinkedCollar { collar_id }) if collar_id == CollarId::new(9)
    ));
}

#[test]
fn add_task_rejects_short_text_without_writing() {
    let board = test_board();
    let session = register(&board, "alice");
    board
        .collars()
        .link(&session.token, CollarId::new(1))
        .unwrap();

    let err = board
        .tasks()
        .add(
            &session.token,
            AddTaskInput {
                collar_id: CollarId::new(1),
                text: "short".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, BoardError::Task(TaskError::TooShortText)));

    assert!(
        board
            .tasks()
            .list_by_author(session.user.id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn add_task_accepts_eleven_characters() {
    let board = test_board();
    let session = register(&board, "alice");
    let task = add_linked_task(&board, &session, 1, "hello world");

    assert_eq!(task.author_id, session.user.id);
    assert_eq!(task.collar_id, CollarId::new(1));
    assert!(!task.deleted);

    let fetched = board.tasks().get(task.id).unwrap();
    assert_eq!(fetched, task);
}

#[test]
fn get_tasks_lists_only_the_authors_tasks_in_order() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");

    let first = add_linked_task(&board, &alice, 1, "first task text");
    let second = add_linked_task(&board, &alice, 2, "second task text");
    add_linked_task(&board, &bob, 3, "bob's task text");

    let tasks = board.tasks().list_by_author(alice.user.id).unwrap();
    assert_eq!(
        tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[test]
fn author_cannot_respond_to_own_task() {
    let board = test_board();
    let alice = register(&board, "alice");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let err = board
        .responses()
        .add(
            &alice.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "proof.jpg".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::UserIsAuthorOfTask { task_id }) if task_id == task.id
    ));
}

#[test]
fn respond_to_missing_task_fails() {
    let board = test_board();
    let bob = register(&board, "bob");

    let err = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: TaskId::new(42),
                image_path: "proof.jpg".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::NoTask { task_id }) if task_id == TaskId::new(42)
    ));
}

#[test]
fn confirmation_is_monotonic_per_task() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let carol = register(&board, "carol");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let first = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "bob.jpg".to_string(),
            },
        )
        .unwrap();
    let second = board
        .responses()
        .add(
            &carol.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "carol.jpg".to_string(),
            },
        )
        .unwrap();

    assert!(board.responses().confirm(&alice.token, first.id).unwrap());
    assert!(board.responses().get(first.id).unwrap().is_confirmed);

    // Re-confirming the same response is an error, not a no-op.
    let err = board
        .responses()
        .confirm(&alice.token, first.id)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::ResponseAlreadyConfirmed { response_id })
            if response_id == first.id
    ));

    let err = board
        .responses()
        .confirm(&alice.token, second.id)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::TaskHasConfirmedResponse { task_id, response_id })
            if task_id == task.id && response_id == first.id
    ));
    assert!(!board.responses().get(second.id).unwrap().is_confirmed);
}

#[test]
fn only_the_task_author_can_confirm() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let response = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "bob.jpg".to_string(),
            },
        )
        .unwrap();

    let err = board
        .responses()
        .confirm(&bob.token, response.id)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::UserIsNotAuthor {
            author_id,
            response_id,
            task_id,
        }) if author_id == alice.user.id && response_id == response.id && task_id == task.id
    ));
}

#[test]
fn confirm_missing_response_fails() {
    let board = test_board();
    let alice = register(&board, "alice");

    let err = board
        .responses()
        .confirm(&alice.token, cb_core::types::ResponseId::new(7))
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::NoResponse { .. })
    ));
}

#[test]
fn remove_task_is_blocked_by_any_response() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "bob.jpg".to_string(),
            },
        )
        .unwrap();

    // Unconfirmed responses still block deletion.
    let err = board.tasks().remove(&alice.token, task.id).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::TaskHasResponses { task_id }) if task_id == task.id
    ));
}

#[test]
fn remove_task_without_responses_soft_deletes() {
    let board = test_board();
    let alice = register(&board, "alice");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    assert!(board.tasks().remove(&alice.token, task.id).unwrap());

    let err = board.tasks().get(task.id).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::NoTask { task_id }) if task_id == task.id
    ));
    assert!(
        board
            .tasks()
            .list_by_author(alice.user.id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn only_the_author_can_remove_a_task() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let err = board.tasks().remove(&bob.token, task.id).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::NotUsersTask { task_id }) if task_id == task.id
    ));
}

#[test]
fn only_the_response_author_can_remove_it() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let response = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "bob.jpg".to_string(),
            },
        )
        .unwrap();

    let err = board
        .responses()
        .remove(&alice.token, response.id)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::NotUsersResponse { response_id })
            if response_id == response.id
    ));

    assert!(board.responses().remove(&bob.token, response.id).unwrap());
    let err = board.responses().get(response.id).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::NoResponse { .. })
    ));
}

#[test]
fn removed_response_no_longer_blocks_task_deletion() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");
    let task = add_linked_task(&board, &alice, 1, "hello world");

    let response = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "bob.jpg".to_string(),
            },
        )
        .unwrap();
    board.responses().remove(&bob.token, response.id).unwrap();

    assert!(board.tasks().remove(&alice.token, task.id).unwrap());
}

#[test]
fn full_workflow_scenario() {
    let board = test_board();
    let alice = register(&board, "alice");
    let bob = register(&board, "bob");

    // Alice creates a collar-linked task with an 11-character text.
    let task = add_linked_task(&board, &alice, 5, "hello world");

    // Bob posts a response.
    let response = board
        .responses()
        .add(
            &bob.token,
            AddResponseInput {
                task_id: task.id,
                image_path: "done.png".to_string(),
            },
        )
        .unwrap();

    // Alice confirms it.
    assert!(board.responses().confirm(&alice.token, response.id).unwrap());

    // Confirming again fails.
    let err = board
        .responses()
        .confirm(&alice.token, response.id)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardError::Response(ResponseError::ResponseAlreadyConfirmed { .. })
    ));

    // The task can no longer be removed.
    let err = board.tasks().remove(&alice.token, task.id).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Task(TaskError::TaskHasResponses { .. })
    ));
}

#[test]
fn ids_are_plain_integers() {
    // Route handlers parse ids straight from query strings.
    let id: UserId = "17".parse().unwrap();
    assert_eq!(id, UserId::new(17));
    assert_eq!(id.to_string(), "17");
}
