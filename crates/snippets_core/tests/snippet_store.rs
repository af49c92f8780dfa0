use snippets_core::db::open_db;
use snippets_core::{RepoError, Snippet, SnippetRepository, SnippetValidationError, SqliteSnippetRepository};
use tempfile::TempDir;

#[test]
fn upsert_then_get_returns_value() {
    let (_dir, repo) = temp_repo();

    repo.upsert(&snippet("email", "me@example.com")).unwrap();

    assert_eq!(repo.get("email").unwrap().as_deref(), Some("me@example.com"));
}

#[test]
fn upsert_overwrites_without_duplicating_rows() {
    let (_dir, repo) = temp_repo();

    repo.upsert(&snippet("email", "old@example.com")).unwrap();
    repo.upsert(&snippet("email", "new@example.com")).unwrap();

    assert_eq!(repo.get("email").unwrap().as_deref(), Some("new@example.com"));
    assert_eq!(row_count(&repo), 1);
}

#[test]
fn missing_key_and_empty_value_are_distinguishable() {
    let (_dir, repo) = temp_repo();
    repo.upsert(&snippet("blank", "")).unwrap();

    assert_eq!(repo.get("blank").unwrap().as_deref(), Some(""));
    assert_eq!(repo.get("absent").unwrap(), None);
}

#[test]
fn lookups_trim_key_but_stay_case_sensitive() {
    let (_dir, repo) = temp_repo();
    repo.upsert(&snippet("Token", "abc")).unwrap();

    assert_eq!(repo.get("  Token ").unwrap().as_deref(), Some("abc"));
    assert_eq!(repo.get("token").unwrap(), None);
}

#[test]
fn delete_removes_row_and_is_idempotent() {
    let (_dir, repo) = temp_repo();
    repo.upsert(&snippet("tmp", "x")).unwrap();

    assert!(repo.delete("tmp").unwrap());
    assert_eq!(repo.get("tmp").unwrap(), None);
    assert!(!repo.delete("tmp").unwrap());
    assert!(!repo.delete("never-existed").unwrap());
}

#[test]
fn blank_keys_are_rejected_on_write_and_ignored_on_read() {
    let (_dir, repo) = temp_repo();
    let invalid = Snippet {
        key: "   ".to_string(),
        value: "x".to_string(),
    };

    let err = repo.upsert(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(SnippetValidationError::EmptyKey)
    ));
    assert_eq!(repo.get(" ").unwrap(), None);
    assert!(!repo.delete("").unwrap());
    assert_eq!(row_count(&repo), 0);
}

#[test]
fn writes_are_visible_to_a_new_repository_instance() {
    let (dir, repo) = temp_repo();
    repo.upsert(&snippet("persisted", "yes")).unwrap();
    drop(repo);

    let reopened = SqliteSnippetRepository::try_new(dir.path().join("snippets.db")).unwrap();
    assert_eq!(reopened.get("persisted").unwrap().as_deref(), Some("yes"));
}

#[test]
fn try_new_reports_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();

    let err = SqliteSnippetRepository::try_new(dir.path()).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn lazy_repository_reports_errors_per_call() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::new(dir.path().join("missing").join("snippets.db"));

    assert!(matches!(repo.get("k"), Err(RepoError::Db(_))));
}

fn temp_repo() -> (TempDir, SqliteSnippetRepository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteSnippetRepository::try_new(dir.path().join("snippets.db")).unwrap();
    (dir, repo)
}

fn snippet(key: &str, value: &str) -> Snippet {
    Snippet::new(key, value).unwrap()
}

fn row_count(repo: &SqliteSnippetRepository) -> i64 {
    let conn = open_db(repo.db_path()).unwrap();
    conn.query_row("SELECT COUNT(*) FROM snippets;", [], |row| row.get(0))
        .unwrap()
}
