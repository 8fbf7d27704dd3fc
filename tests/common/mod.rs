//! Shared test fixtures
//!
//! Stands up a local HTTP origin so tests can observe exactly when the
//! store falls back to the network, and builds stores wired to it.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use strata::model::{Todo, User};
use strata::{Config, Store};

/// A local stand-in for the remote origin service
pub struct MockOrigin {
    /// Base URL to point a store at
    pub base_url: String,

    /// Number of requests served for /users (including failed ones)
    pub user_fetches: Arc<AtomicUsize>,

    /// Number of requests served for /todos (including failed ones)
    pub todo_fetches: Arc<AtomicUsize>,

    /// While set, every route answers 500
    pub fail: Arc<AtomicBool>,
}

impl MockOrigin {
    pub fn user_fetch_count(&self) -> usize {
        self.user_fetches.load(Ordering::SeqCst)
    }

    pub fn todo_fetch_count(&self) -> usize {
        self.todo_fetches.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

/// Spawn an origin serving the given collections on an ephemeral port
pub async fn spawn_origin(users: Vec<User>, todos: Vec<Todo>) -> MockOrigin {
    let user_fetches = Arc::new(AtomicUsize::new(0));
    let todo_fetches = Arc::new(AtomicUsize::new(0));
    let fail = Arc::new(AtomicBool::new(false));

    let users_route = {
        let count = Arc::clone(&user_fetches);
        let fail = Arc::clone(&fail);
        get(move || {
            let users = users.clone();
            let count = Arc::clone(&count);
            let fail = Arc::clone(&fail);
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                if fail.load(Ordering::SeqCst) {
                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                } else {
                    Ok(Json(users))
                }
            }
        })
    };

    let todos_route = {
        let count = Arc::clone(&todo_fetches);
        let fail = Arc::clone(&fail);
        get(move || {
            let todos = todos.clone();
            let count = Arc::clone(&count);
            let fail = Arc::clone(&fail);
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                if fail.load(Ordering::SeqCst) {
                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                } else {
                    Ok(Json(todos))
                }
            }
        })
    };

    let app = Router::new()
        .route("/users", users_route)
        .route("/todos", todos_route);

    let base_url = serve(app).await;

    MockOrigin {
        base_url,
        user_fetches,
        todo_fetches,
        fail,
    }
}

/// Spawn an origin whose /users body is not a valid collection
pub async fn spawn_garbled_origin() -> String {
    let app = Router::new()
        .route("/users", get(|| async { Json("not-a-collection") }))
        .route("/todos", get(|| async { Json("not-a-collection") }));

    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock origin");
    let addr = listener.local_addr().expect("mock origin addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock origin serve");
    });

    format!("http://{addr}")
}

/// Build a store pointed at the given origin and data directory
pub fn test_store(origin_base_url: &str, data_dir: &Path) -> Store {
    let config = Config::builder()
        .data_dir(data_dir)
        .origin_base_url(origin_base_url)
        .origin_timeout(Duration::from_secs(2))
        .build();

    Store::open(config).expect("open store")
}

/// Sample user collection mirroring the origin's shape
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "bret".to_string(),
            email: "leanne@example.com".to_string(),
            phone: "1-770-736-8031".to_string(),
            website: "hildegard.org".to_string(),
        },
        User {
            id: 2,
            name: "Ervin Howell".to_string(),
            username: "antonette".to_string(),
            email: "ervin@example.com".to_string(),
            phone: "010-692-6593".to_string(),
            website: "anastasia.net".to_string(),
        },
    ]
}

/// Sample todo collection owned by the sample users
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            user_id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            user_id: 1,
            title: "quis ut nam".to_string(),
            completed: true,
        },
        Todo {
            id: 3,
            user_id: 2,
            title: "fugiat veniam minus".to_string(),
            completed: false,
        },
    ]
}
