use snippets_core::{
    error_chain, ActionDescriptor, ActionExecutor, ClipboardError, ClipboardPort, MemoryClipboard,
    PersistenceError, SnippetRepository, SnippetValidationError, SqliteSnippetRepository,
};
use std::error::Error;
use tempfile::TempDir;

#[test]
fn save_upserts_and_copies_value() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    executor.execute(&save("sig", "Best regards")).unwrap();

    assert_eq!(repo.get("sig").unwrap().as_deref(), Some("Best regards"));
    assert_eq!(clipboard.text(), "Best regards");
}

#[test]
fn save_overwrites_existing_value() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    executor.execute(&save("sig", "v1")).unwrap();
    executor.execute(&save(" sig ", "v2")).unwrap();

    assert_eq!(repo.get("sig").unwrap().as_deref(), Some("v2"));
}

#[test]
fn save_keeps_value_whitespace() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    executor.execute(&save(" line ", "  line\n")).unwrap();

    assert_eq!(repo.get("line").unwrap().as_deref(), Some("  line\n"));
    assert_eq!(clipboard.text(), "  line\n");
}

#[test]
fn save_succeeds_when_clipboard_write_fails() {
    let (_dir, repo) = temp_repo();
    let executor = ActionExecutor::new(&repo, &FailingClipboard);

    executor.execute(&save("k", "v")).unwrap();

    assert_eq!(repo.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn save_with_blank_key_is_rejected() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::with_text("before");
    let executor = ActionExecutor::new(&repo, &clipboard);

    let err = executor.execute(&save("  ", "v")).unwrap_err();

    assert!(matches!(
        err,
        PersistenceError::InvalidKey(SnippetValidationError::EmptyKey)
    ));
    assert_eq!(clipboard.text(), "before");
}

#[test]
fn save_propagates_store_failure() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::new(dir.path().join("missing").join("snippets.db"));
    let clipboard = MemoryClipboard::with_text("before");
    let executor = ActionExecutor::new(&repo, &clipboard);

    let err = executor.execute(&save("k", "v")).unwrap_err();

    assert!(matches!(err, PersistenceError::Store(_)));
    assert_eq!(clipboard.text(), "before");
}

#[test]
fn store_failure_names_each_cause_once() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::new(dir.path().join("missing").join("snippets.db"));
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    let err = executor.execute(&save("k", "v")).unwrap_err();

    // Executor, repository and db layers; rusqlite formats its own causes.
    let mut current: &dyn Error = &err;
    for _ in 0..3 {
        let cause = current.source().unwrap();
        let outer = current.to_string();
        let inner = cause.to_string();
        assert!(
            !outer.contains(&inner),
            "`{outer}` repeats its cause `{inner}`"
        );
        current = cause;
    }
    assert!(error_chain(&err).starts_with("snippet store write failed: snippet store error: "));
}

#[test]
fn copy_only_touches_clipboard() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    executor
        .execute(&ActionDescriptor::Copy {
            value: "copied".to_string(),
        })
        .unwrap();

    assert_eq!(clipboard.text(), "copied");
    assert_eq!(repo.get("copied").unwrap(), None);
}

#[test]
fn copy_ignores_clipboard_failure() {
    let (_dir, repo) = temp_repo();
    let executor = ActionExecutor::new(&repo, &FailingClipboard);

    let result = executor.execute(&ActionDescriptor::Copy {
        value: "x".to_string(),
    });

    assert!(result.is_ok());
}

#[test]
fn delete_twice_is_safe() {
    let (_dir, repo) = temp_repo();
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);
    executor.execute(&save("gone", "soon")).unwrap();

    let delete = ActionDescriptor::Delete {
        key: "gone".to_string(),
    };
    executor.execute(&delete).unwrap();
    executor.execute(&delete).unwrap();

    assert_eq!(repo.get("gone").unwrap(), None);
}

#[test]
fn delete_propagates_store_failure() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::new(dir.path().join("missing").join("snippets.db"));
    let clipboard = MemoryClipboard::new();
    let executor = ActionExecutor::new(&repo, &clipboard);

    let err = executor
        .execute(&ActionDescriptor::Delete {
            key: "k".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, PersistenceError::Store(_)));
}

struct FailingClipboard;

impl ClipboardPort for FailingClipboard {
    fn read(&self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable("headless".to_string()))
    }

    fn write(&self, _value: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Backend("locked".to_string()))
    }
}

fn save(key: &str, value: &str) -> ActionDescriptor {
    ActionDescriptor::Save {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn temp_repo() -> (TempDir, SqliteSnippetRepository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::try_new(dir.path().join("snippets.db")).unwrap();
    (dir, repo)
}
