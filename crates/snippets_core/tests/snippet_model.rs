use snippets_core::{ActionDescriptor, Snippet, SnippetValidationError};

#[test]
fn new_trims_key_and_keeps_value_verbatim() {
    let snippet = Snippet::new("  greeting \t", "  hello\n").unwrap();

    assert_eq!(snippet.key, "greeting");
    assert_eq!(snippet.value, "  hello\n");
}

#[test]
fn new_rejects_blank_key() {
    assert_eq!(
        Snippet::new("   ", "value").unwrap_err(),
        SnippetValidationError::EmptyKey
    );
}

#[test]
fn empty_value_is_allowed() {
    let snippet = Snippet::new("k", "").unwrap();
    assert!(snippet.value.is_empty());
}

#[test]
fn keys_are_case_sensitive() {
    let lower = Snippet::new("key", "v").unwrap();
    let upper = Snippet::new("KEY", "v").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn deserialize_rejects_blank_key() {
    let value = serde_json::json!({ "key": "  ", "value": "x" });

    let err = serde_json::from_value::<Snippet>(value).unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "unexpected error: {err}");
}

#[test]
fn action_descriptor_serializes_with_kind_tag() {
    let action = ActionDescriptor::Save {
        key: "k".to_string(),
        value: "v".to_string(),
    };

    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["kind"], "save");
    assert_eq!(json["key"], "k");
    assert_eq!(json["value"], "v");
    assert_eq!(action.name(), "save");

    let decoded: ActionDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, action);
}
