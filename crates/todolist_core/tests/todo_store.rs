use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use todolist_core::db::open_db_in_memory;
use todolist_core::{SqliteTodoRepository, StoreError, TodoId, TodoRepository};

fn repo() -> SqliteTodoRepository {
    SqliteTodoRepository::new(open_db_in_memory().unwrap())
}

#[test]
fn insert_assigns_unique_ids() {
    let repo = repo();

    let first = repo.insert("same text").unwrap();
    let second = repo.insert("same text").unwrap();

    assert_ne!(first.id, second.id);
    assert!(!first.id.as_str().is_empty());
}

#[test]
fn list_all_on_empty_store_is_empty() {
    let repo = repo();
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn list_all_returns_items_in_insertion_order() {
    let repo = repo();
    let a = repo.insert("A").unwrap();
    let b = repo.insert("B").unwrap();
    let c = repo.insert("C").unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed, vec![a, b, c]);
}

#[test]
fn text_is_stored_verbatim() {
    let repo = repo();
    let raw = "  <b>spaces</b> & \"quotes\"\nnewline  ";
    repo.insert(raw).unwrap();
    repo.insert("").unwrap();

    let texts = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|item| item.text)
        .collect::<Vec<_>>();
    assert_eq!(texts, vec![raw.to_string(), String::new()]);
}

#[test]
fn delete_by_id_removes_only_the_matching_item() {
    let repo = repo();
    let keep = repo.insert("keep").unwrap();
    let drop_me = repo.insert("drop").unwrap();

    repo.delete_by_id(&drop_me.id).unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed, vec![keep]);
}

#[test]
fn delete_by_unknown_id_is_a_no_op() {
    let repo = repo();
    let item = repo.insert("still here").unwrap();

    repo.delete_by_id(&TodoId::from("not-a-real-id")).unwrap();
    repo.delete_by_id(&TodoId::from("")).unwrap();
    repo.delete_by_id(&item.id).unwrap();
    repo.delete_by_id(&item.id).unwrap();

    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.sqlite3");

    let repo = SqliteTodoRepository::connect(&path);
    assert!(repo.is_connected());
    repo.insert("persisted").unwrap();
    drop(repo);

    let reopened = SqliteTodoRepository::connect(&path);
    let texts = reopened
        .list_all()
        .unwrap()
        .into_iter()
        .map(|item| item.text)
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["persisted".to_string()]);
}

#[test]
fn connect_failure_yields_unavailable_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("todolist.sqlite3");

    let repo = SqliteTodoRepository::connect(&path);
    assert!(!repo.is_connected());
    assert!(matches!(repo.list_all(), Err(StoreError::Unavailable)));
}

#[test]
fn concurrent_inserts_are_all_persisted() {
    let repo = Arc::new(repo());

    let handles = (0..8)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..10)
                    .map(|n| repo.insert(&format!("w{worker}-{n}")).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.extend(handle.join().unwrap());
    }

    assert_eq!(ids.len(), 80);
    assert_eq!(repo.list_all().unwrap().len(), 80);
}
