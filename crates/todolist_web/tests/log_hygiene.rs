//! Checks what reaches the logger while requests are served.

use log::{LevelFilter, Log, Metadata, Record};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::sync::{Arc, Mutex, Once};
use todolist_core::db::open_db_in_memory;
use todolist_core::{SqliteTodoRepository, TodoService};
use todolist_web::router;
use tokio::net::TcpListener;

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = format!("{} {} {}", record.level(), record.target(), record.args());
        self.lines.lock().unwrap().push(line);
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn captured_lines() -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER.lines.lock().unwrap().clone()
}

async fn spawn_server(repo: SqliteTodoRepository) -> String {
    let static_dir = tempfile::tempdir().unwrap();
    let app = router(Arc::new(TodoService::new(repo)), static_dir.path());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _static_dir = static_dir;
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

#[tokio::test]
async fn todo_text_never_reaches_the_log() {
    captured_lines();
    let secret = "zebra-7431 pick up the prescription";
    let base_url = spawn_server(SqliteTodoRepository::new(open_db_in_memory().unwrap())).await;
    let client = client();

    let add = client
        .post(format!("{base_url}/add"))
        .form(&[("todo", secret)])
        .send()
        .await
        .unwrap();
    assert_eq!(add.status(), StatusCode::SEE_OTHER);

    let page = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(secret));
    let id = page
        .split("name=\"checkbox_id\" value=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();

    let delete = client
        .post(format!("{base_url}/delete"))
        .form(&[("checkbox_id", id.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::SEE_OTHER);

    let lines = captured_lines();
    assert!(lines
        .iter()
        .any(|line| line.contains("event=todo_add") && line.contains(&id)));
    assert!(lines
        .iter()
        .any(|line| line.contains("event=todo_remove") && line.contains(&id)));
    assert!(lines.iter().all(|line| !line.contains("zebra-7431")));
}

#[tokio::test]
async fn each_store_failure_is_logged_once() {
    captured_lines();
    let base_url = spawn_server(SqliteTodoRepository::disconnected()).await;
    let client = client();
    let failures = || {
        captured_lines()
            .iter()
            .filter(|line| line.contains("todo store is not connected"))
            .count()
    };
    let before = failures();

    let add = client
        .post(format!("{base_url}/add"))
        .form(&[("todo", "lost")])
        .send()
        .await
        .unwrap();
    assert_eq!(add.status(), StatusCode::SEE_OTHER);
    assert_eq!(failures(), before + 1);

    let delete = client
        .post(format!("{base_url}/delete"))
        .form(&[("checkbox_id", "anything")])
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(failures(), before + 2);
}
