use crate::parser::extract_technologies;
use pretty_assertions::assert_eq;

#[test]
fn dependency_keys_are_title_cased() {
    let text = r#"{
  "dependencies": {
    "express": "4.18.0",
    "socket_io": "4.7.0"
  }
}"#;
    assert_eq!(extract_technologies(text), vec!["Express", "Socket Io"]);
}

#[test]
fn scoped_package_drops_scope_and_splits_hyphens() {
    let text = r#""dependencies": { "@foo/bar-baz": "1.0.0" }"#;
    assert_eq!(extract_technologies(text), vec!["Bar Baz"]);
}

#[test]
fn dev_dependencies_are_included() {
    let text = r#"
"dependencies": { "express": "4.18.0" }
"devDependencies": { "nodemon": "3.0.1" }
"#;
    assert_eq!(extract_technologies(text), vec!["Express", "Nodemon"]);
}

#[test]
fn stack_line_is_split_on_separators() {
    let text = "A small demo app.\n\nBuilt with: Rust, Tokio | Axum & Postgres\n";
    assert_eq!(
        extract_technologies(text),
        vec!["Rust", "Tokio", "Axum", "Postgres"]
    );
}

#[test]
fn manifest_and_stack_line_are_merged_without_duplicates() {
    let text = r#"
"dependencies": { "react": "18.2.0" }

Stack: React, Tailwind CSS
"#;
    assert_eq!(
        extract_technologies(text),
        vec!["React", "Tailwind CSS"]
    );
}

#[test]
fn names_of_thirty_chars_or_more_are_dropped() {
    let long_name = "a".repeat(30);
    let text = format!(r#""dependencies": {{ "{}": "1.0.0", "express": "4.18.0" }}"#, long_name);
    assert_eq!(extract_technologies(&text), vec!["Express"]);
}

#[test]
fn capped_at_thirty_in_discovery_order() {
    let mut deps = String::new();
    for i in 0..40 {
        deps.push_str(&format!(r#""pkg{}": "1.0.0","#, i));
    }
    let text = format!(r#""dependencies": {{ {} }}"#, deps);

    let techs = extract_technologies(&text);
    assert_eq!(techs.len(), 30);
    assert_eq!(techs[0], "Pkg0");
    assert_eq!(techs[29], "Pkg29");
}

#[test]
fn empty_text_yields_nothing() {
    assert!(extract_technologies("").is_empty());
}
