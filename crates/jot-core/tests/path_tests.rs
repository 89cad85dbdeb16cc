use jot_core::{path, Key, Kind, Node, PathError};

// ============================================================================
// Get
// ============================================================================

#[test]
fn get_hash_member_by_name() {
    let doc = Node::from_text(r#"{"a": 1, "b": 2}"#);
    assert_eq!(doc.get(path!["b"]), Some(&Node::Number(2.0)));
}

#[test]
fn get_list_child_by_index() {
    let doc = Node::from_text("[10, 20, 30]");
    assert_eq!(doc.get(path![0]), Some(&Node::Number(10.0)));
    assert_eq!(doc.get(path![2]), Some(&Node::Number(30.0)));
}

#[test]
fn get_mixed_path() {
    let doc = Node::from_text(r#"{"users": [{"name": "ada"}, {"name": "lin"}]}"#);
    let name = doc.get(path!["users", 1, "name"]);
    assert_eq!(name.and_then(Node::as_str), Some("lin"));
}

#[test]
fn get_empty_path_answers_the_node_itself() {
    let doc = Node::from_text("[1]");
    assert_eq!(doc.get(path![]), Some(&doc));
}

#[test]
fn get_index_out_of_range() {
    let doc = Node::from_text("[1, 2]");
    assert_eq!(doc.get(path![2]), None);
}

#[test]
fn get_missing_name() {
    let doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.get(path!["b"]), None);
}

#[test]
fn get_index_against_hash_is_a_miss() {
    let doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.get(path![0]), None);
}

#[test]
fn get_name_against_list_is_a_miss() {
    let doc = Node::from_text("[1, 2]");
    assert_eq!(doc.get(path!["a"]), None);
}

#[test]
fn get_through_scalar_is_a_miss() {
    let doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.get(path!["a", "deeper"]), None);
}

#[test]
fn get_missing_prefix_never_panics() {
    // Resolution stops at the first miss, whatever comes after.
    let doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.get(path!["missing", "deeper"]), None);
    assert_eq!(Node::Null.get(path!["missing", "deeper"]), None);
}

#[test]
fn get_duplicate_key_answers_first_match() {
    let doc = Node::from_text(r#"{"a": 1, "a": 2}"#);
    assert_eq!(doc.get(path!["a"]), Some(&Node::Number(1.0)));
}

#[test]
fn get_accepts_plain_str_arrays() {
    let doc = Node::from_text(r#"{"a": {"b": true}}"#);
    assert_eq!(doc.get(["a", "b"]), Some(&Node::Bool(true)));
}

#[test]
fn get_accepts_borrowed_key_sequences() {
    let doc = Node::from_text(r#"{"a": [5]}"#);
    let keys = vec![Key::Name("a".to_string()), Key::Index(0)];
    assert_eq!(doc.get(&keys), Some(&Node::Number(5.0)));
    // The path survives for reuse.
    assert_eq!(doc.get(&keys), Some(&Node::Number(5.0)));
}

#[test]
fn get_mut_edits_through_the_path() {
    let mut doc = Node::from_text(r#"{"n": 1}"#);
    if let Some(node) = doc.get_mut(path!["n"]) {
        *node = Node::Number(2.0);
    }
    assert_eq!(doc.get(path!["n"]), Some(&Node::Number(2.0)));
}

#[test]
fn get_mut_miss_is_none() {
    let mut doc = Node::from_text(r#"{"n": 1}"#);
    assert_eq!(doc.get_mut(path!["missing"]), None);
}

// ============================================================================
// Set
// ============================================================================

#[test]
fn set_appends_a_new_member() {
    let mut doc = Node::from_text("{}");
    doc.set(true, path!["flag"]).unwrap();
    assert_eq!(doc.get(path!["flag"]), Some(&Node::Bool(true)));
    assert_eq!(doc.len(), 1);
}

#[test]
fn set_overwrites_in_place_keeping_position() {
    let mut doc = Node::from_text(r#"{"a": 1, "b": 2, "c": 3}"#);
    doc.set(9, path!["b"]).unwrap();
    assert_eq!(doc.to_text(), "{\n\t\"a\": 1,\n\t\"b\": 9,\n\t\"c\": 3\n}");
}

#[test]
fn set_new_member_lands_at_the_end() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    doc.set(2, path!["b"]).unwrap();
    let keys: Vec<_> = doc.entries().filter_map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn set_duplicate_key_overwrites_first_match() {
    let mut doc = Node::from_text(r#"{"a": 1, "a": 2}"#);
    doc.set(9, path!["a"]).unwrap();
    assert_eq!(doc.to_text(), "{\n\t\"a\": 9,\n\t\"a\": 2\n}");
}

#[test]
fn set_list_index_replaces_in_place() {
    let mut doc = Node::from_text("[10, 20, 30]");
    doc.set(99, path![1]).unwrap();
    assert_eq!(doc, Node::from_text("[10, 99, 30]"));
}

#[test]
fn set_list_index_at_length_appends() {
    let mut doc = Node::from_text("[10, 20]");
    doc.set(30, path![2]).unwrap();
    assert_eq!(doc, Node::from_text("[10, 20, 30]"));
}

#[test]
fn set_list_index_past_length_appends() {
    // Any out-of-range index appends; there is no hole-filling.
    let mut doc = Node::from_text("[10]");
    doc.set(20, path![100]).unwrap();
    assert_eq!(doc, Node::from_text("[10, 20]"));
}

#[test]
fn set_deep_path() {
    let mut doc = Node::from_text(r#"{"users": [{"name": "ada"}]}"#);
    doc.set("lin", path!["users", 0, "name"]).unwrap();
    assert_eq!(
        doc.get(path!["users", 0, "name"]).and_then(Node::as_str),
        Some("lin")
    );
}

#[test]
fn set_empty_path_assigns_the_node_itself() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    doc.set(42, path![]).unwrap();
    assert_eq!(doc, Node::Number(42.0));
}

#[test]
fn set_accepts_any_value_conversion() {
    let mut doc = Node::from_text("{}");
    doc.set("text", path!["s"]).unwrap();
    doc.set(1.5, path!["n"]).unwrap();
    doc.set((), path!["nothing"]).unwrap();
    doc.set(Node::list(), path!["xs"]).unwrap();
    assert_eq!(doc.get(path!["s"]).and_then(Node::as_str), Some("text"));
    assert_eq!(doc.get(path!["n"]), Some(&Node::Number(1.5)));
    assert_eq!(doc.get(path!["nothing"]), Some(&Node::Null));
    assert_eq!(doc.get(path!["xs"]), Some(&Node::list()));
}

#[test]
fn set_missing_prefix_is_not_found() {
    // No auto-vivification of intermediate containers.
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    let err = doc.set(2, path!["missing", "deep"]).unwrap_err();
    assert_eq!(
        err,
        PathError::NotFound {
            key: Key::Name("missing".to_string()),
        }
    );
}

#[test]
fn set_prefix_through_scalar_is_not_found() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    let err = doc.set(2, path!["a", "x", "y"]).unwrap_err();
    assert_eq!(
        err,
        PathError::NotFound {
            key: Key::Name("x".to_string()),
        }
    );
}

#[test]
fn set_name_against_list_is_a_kind_mismatch() {
    let mut doc = Node::from_text(r#"{"a": [1]}"#);
    let err = doc.set(2, path!["a", "name"]).unwrap_err();
    assert_eq!(
        err,
        PathError::KindMismatch {
            key: Key::Name("name".to_string()),
            kind: Kind::List,
        }
    );
}

#[test]
fn set_index_against_hash_is_a_kind_mismatch() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    let err = doc.set(2, path![0]).unwrap_err();
    assert_eq!(
        err,
        PathError::KindMismatch {
            key: Key::Index(0),
            kind: Kind::Hash,
        }
    );
}

#[test]
fn set_final_key_against_scalar_is_a_kind_mismatch() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    let err = doc.set(2, path!["a", "x"]).unwrap_err();
    assert_eq!(
        err,
        PathError::KindMismatch {
            key: Key::Name("x".to_string()),
            kind: Kind::Number,
        }
    );
}

#[test]
fn set_failure_leaves_the_tree_untouched() {
    let doc = Node::from_text(r#"{"a": [1, 2], "b": {"c": 3}}"#);
    let mut edited = doc.clone();
    assert!(edited.set(9, path!["missing", 0]).is_err());
    assert!(edited.set(9, path!["a", "name"]).is_err());
    assert_eq!(edited, doc);
}

// ============================================================================
// Del
// ============================================================================

#[test]
fn del_removes_a_hash_member() {
    let mut doc = Node::from_text(r#"{"a": 1, "b": 2}"#);
    assert_eq!(doc.del(path!["a"]), Some(Node::Number(1.0)));
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(path!["a"]), None);
    assert_eq!(doc.get(path!["b"]), Some(&Node::Number(2.0)));
}

#[test]
fn del_list_index_closes_the_gap() {
    let mut doc = Node::from_text("[1, 2, 3]");
    assert_eq!(doc.del(path![1]), Some(Node::Number(2.0)));
    assert_eq!(doc, Node::from_text("[1, 3]"));
}

#[test]
fn del_returns_the_whole_subtree() {
    let mut doc = Node::from_text(r#"{"xs": [1, 2]}"#);
    let removed = doc.del(path!["xs"]);
    assert_eq!(removed, Some(Node::from_text("[1, 2]")));
    assert!(doc.is_empty());
}

#[test]
fn del_missing_name_is_a_noop() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.del(path!["b"]), None);
    assert_eq!(doc, Node::from_text(r#"{"a": 1}"#));
}

#[test]
fn del_index_out_of_range_is_a_noop() {
    let mut doc = Node::from_text("[1]");
    assert_eq!(doc.del(path![5]), None);
    assert_eq!(doc.len(), 1);
}

#[test]
fn del_kind_mismatch_is_a_noop() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.del(path![0]), None);
    assert_eq!(doc.len(), 1);
}

#[test]
fn del_unresolved_prefix_is_a_noop() {
    let mut doc = Node::from_text(r#"{"a": 1}"#);
    assert_eq!(doc.del(path!["nope", 0]), None);
    assert_eq!(doc, Node::from_text(r#"{"a": 1}"#));
}

#[test]
fn del_empty_path_is_a_noop() {
    let mut doc = Node::from_text("[1]");
    assert_eq!(doc.del(path![]), None);
    assert_eq!(doc.len(), 1);
}

#[test]
fn del_duplicate_key_removes_first_only() {
    let mut doc = Node::from_text(r#"{"a": 1, "a": 2}"#);
    assert_eq!(doc.del(path!["a"]), Some(Node::Number(1.0)));
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.child("a"), Some(&Node::Number(2.0)));
}

#[test]
fn del_deep_path() {
    let mut doc = Node::from_text(r#"{"users": [{"name": "ada"}, {"name": "lin"}]}"#);
    let removed = doc.del(path!["users", 0]);
    assert_eq!(removed, Some(Node::from_text(r#"{"name": "ada"}"#)));
    assert_eq!(
        doc.get(path!["users", 0, "name"]).and_then(Node::as_str),
        Some("lin")
    );
}

// ============================================================================
// Keys and the path! macro
// ============================================================================

#[test]
fn path_macro_converts_mixed_literals() {
    assert_eq!(
        path!["users", 0, "name"],
        [
            Key::Name("users".to_string()),
            Key::Index(0),
            Key::Name("name".to_string()),
        ]
    );
}

#[test]
fn path_macro_tolerates_trailing_comma() {
    assert_eq!(path!["a", 1,], path!["a", 1]);
}

#[test]
fn path_macro_empty() {
    assert_eq!(path![].len(), 0);
}

#[test]
fn key_display_forms() {
    assert_eq!(Key::Index(3).to_string(), "[3]");
    assert_eq!(Key::Name("users".to_string()).to_string(), "\"users\"");
}

#[test]
fn path_error_messages_name_the_step() {
    let not_found = PathError::NotFound {
        key: Key::Name("users".to_string()),
    };
    assert_eq!(not_found.to_string(), "path step \"users\" did not resolve");

    let mismatch = PathError::KindMismatch {
        key: Key::Index(0),
        kind: Kind::Hash,
    };
    assert_eq!(mismatch.to_string(), "cannot apply [0] to a hash node");
}
