//! Persistence flow semantics: confirmed writes apply to the sequence only
//! after the store accepts them, reorders persist best-effort, and every
//! failure surfaces exactly one banner message.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use zenboard::ai::AiAssistant;
use zenboard::icons::IconService;
use zenboard::store::{StoreError, TaskPatch, TaskStore};
use zenboard::task::{CardColor, Priority, Task};
use zenboard::ui::app_component::AppComponent;
use zenboard::ui::core::actions::Action;
use zenboard::ui::core::task_manager::TaskManager;

fn task(id: &str, order_index: i32) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: String::new(),
        priority: Priority::Medium,
        color: CardColor::Blue,
        created_at: 1_700_000_000_000,
        order_index,
    }
}

/// Store double with per-operation failure switches.
#[derive(Default)]
struct ScriptedStore {
    fail_fetch: bool,
    fail_writes: bool,
    fetch_result: Vec<Task>,
    upsert_calls: AtomicUsize,
}

impl ScriptedStore {
    fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl TaskStore for ScriptedStore {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        if self.fail_fetch {
            Err(StoreError::Connectivity("connection refused".to_string()))
        } else {
            Ok(self.fetch_result.clone())
        }
    }

    async fn insert(&self, _task: &Task) -> Result<(), StoreError> {
        if self.fail_writes {
            Err(StoreError::Persistence("insert rejected".to_string()))
        } else {
            Ok(())
        }
    }

    async fn update(&self, _id: &str, _patch: &TaskPatch) -> Result<(), StoreError> {
        if self.fail_writes {
            Err(StoreError::Persistence("update rejected".to_string()))
        } else {
            Ok(())
        }
    }

    async fn remove(&self, _id: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            Err(StoreError::Persistence("delete rejected".to_string()))
        } else {
            Ok(())
        }
    }

    async fn bulk_replace_order(&self, _tasks: &[Task]) -> Result<(), StoreError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            Err(StoreError::Persistence("upsert rejected".to_string()))
        } else {
            Ok(())
        }
    }
}

fn test_app(store: Arc<ScriptedStore>) -> AppComponent {
    AppComponent::new(
        store,
        AiAssistant::new("test-model".to_string(), String::new()),
        IconService::default(),
        true,
    )
}

#[tokio::test]
async fn failed_insert_reports_instead_of_confirming() {
    let store = Arc::new(ScriptedStore::failing_writes());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_create(store, task("t1", 0));

    match rx.recv().await {
        Some(Action::WriteFailed(message)) => assert!(!message.is_empty()),
        other => panic!("expected WriteFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_insert_confirms_with_the_task() {
    let store = Arc::new(ScriptedStore::default());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_create(store, task("t1", 0));

    match rx.recv().await {
        Some(Action::TaskInserted(inserted)) => assert_eq!(inserted.id, "t1"),
        other => panic!("expected TaskInserted, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_fetch_reports_load_failure() {
    let store = Arc::new(ScriptedStore {
        fail_fetch: true,
        ..Default::default()
    });
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_fetch(store);

    match rx.recv().await {
        Some(Action::LoadFailed(message)) => assert!(!message.is_empty()),
        other => panic!("expected LoadFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_delete_confirms_with_the_id() {
    let store = Arc::new(ScriptedStore::default());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_delete(store, "t3".to_string());

    match rx.recv().await {
        Some(Action::TaskRemoved(id)) => assert_eq!(id, "t3"),
        other => panic!("expected TaskRemoved, got {other:?}"),
    }
}

#[tokio::test]
async fn order_save_failure_message_distinguishes_ai_sorts() {
    let store = Arc::new(ScriptedStore::failing_writes());
    let tasks = vec![task("a", 0), task("b", 1)];

    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_save_order(store.clone(), tasks.clone(), false);
    let manual_message = match rx.recv().await {
        Some(Action::WriteFailed(message)) => message,
        other => panic!("expected WriteFailed, got {other:?}"),
    };

    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_save_order(store, tasks, true);
    let ai_message = match rx.recv().await {
        Some(Action::WriteFailed(message)) => message,
        other => panic!("expected WriteFailed, got {other:?}"),
    };

    assert_ne!(manual_message, ai_message);
    assert!(ai_message.contains("AI"));
}

#[tokio::test]
async fn load_failure_leaves_an_empty_sequence_with_an_error() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store);

    assert!(app.state().loading);
    app.dispatch(Action::LoadFailed("could not load".to_string()));

    assert!(app.state().tasks.is_empty());
    assert!(!app.state().loading);
    assert!(app.state().error_message.is_some());
}

#[tokio::test]
async fn write_failure_leaves_the_sequence_unchanged() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store);

    app.dispatch(Action::TasksLoaded(vec![task("a", 0), task("b", 1)]));
    assert_eq!(app.state().tasks.len(), 2);

    app.dispatch(Action::WriteFailed("insert failed".to_string()));

    assert_eq!(app.state().tasks.len(), 2);
    assert_eq!(app.state().error_message.as_deref(), Some("insert failed"));
}

#[tokio::test]
async fn confirmed_insert_appends_to_the_sequence() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store);

    app.dispatch(Action::TasksLoaded(vec![task("a", 0)]));
    app.dispatch(Action::TaskInserted(task("b", 1)));

    let ids: Vec<&str> = app.state().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn only_the_latest_error_shows() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store);

    app.dispatch(Action::WriteFailed("first".to_string()));
    app.dispatch(Action::WriteFailed("second".to_string()));
    assert_eq!(app.state().error_message.as_deref(), Some("second"));

    app.dispatch(Action::DismissError);
    assert!(app.state().error_message.is_none());
}

#[tokio::test]
async fn move_applies_optimistically_and_requests_a_save() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store.clone());

    app.dispatch(Action::TasksLoaded(vec![task("A", 0), task("B", 1), task("C", 2)]));
    app.dispatch(Action::MoveTask { from: 1, to: 0 });

    // Reordered immediately, before any store response
    let ids: Vec<&str> = app.state().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["B", "A", "C"]);
    let indices: Vec<i32> = app.state().tasks.iter().map(|t| t.order_index).collect();
    assert_eq!(indices, [0, 1, 2]);
    assert!(app.is_syncing());

    // The full sequence goes out as one bulk upsert
    for _ in 0..200 {
        if store.upsert_calls.load(Ordering::SeqCst) > 0 {
            break;
        }
        sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(store.upsert_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn ai_order_applies_optimistically_with_unknown_tail() {
    let store = Arc::new(ScriptedStore::default());
    let mut app = test_app(store);

    app.dispatch(Action::TasksLoaded(vec![task("A", 0), task("B", 1), task("C", 2)]));
    app.dispatch(Action::OrderSuggested(vec!["C".to_string(), "A".to_string()]));

    let ids: Vec<&str> = app.state().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["C", "A", "B"]);
}

#[tokio::test]
async fn create_against_a_rejecting_store_never_grows_the_sequence() {
    let store = Arc::new(ScriptedStore::failing_writes());
    let mut app = test_app(store);

    app.dispatch(Action::TasksLoaded(Vec::new()));
    app.dispatch(Action::SubmitTask {
        editing: None,
        patch: TaskPatch {
            title: "doomed".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            color: CardColor::Blue,
        },
    });

    // Drain the background insert until its failure lands
    for _ in 0..200 {
        let actions = app.process_background_actions();
        let done = !actions.is_empty();
        for action in actions {
            app.dispatch(action);
        }
        if done {
            break;
        }
        sleep(Duration::from_millis(10)).await;
    }

    assert!(app.state().tasks.is_empty());
    assert!(app.state().error_message.is_some());
}
