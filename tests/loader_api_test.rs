//! Integration tests for descriptor set loading.

use std::fs;

use proto_locations::{
    file_package, file_syntax, load_descriptor_set, load_file, FileDescriptorSet, LocationError,
    Span,
};
use tempfile::TempDir;

#[test]
fn load_set_and_resolve_each_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("set.json");

    fs::write(
        &path,
        r#"{
  "file": [
    {
      "name": "acme/v1/widget.proto",
      "package": "acme.v1",
      "syntax": "proto3",
      "sourceCodeInfo": {
        "location": [
          {"path": [], "span": [0, 0, 4, 0]},
          {"path": [12], "span": [0, 0, 18]},
          {"path": [2], "span": [2, 0, 16], "trailingComments": " the package\n"}
        ]
      }
    },
    {
      "name": "google/protobuf/empty.proto",
      "package": "google.protobuf"
    }
  ]
}"#,
    )
    .unwrap();

    let set = load_descriptor_set(&path).unwrap();
    assert_eq!(set.len(), 2);

    let widget = set.file_by_name("acme/v1/widget.proto").unwrap();
    assert_eq!(file_syntax(widget), Span::single_line(0, 0, 18));
    assert_eq!(file_package(widget), Span::single_line(2, 0, 16));

    let empty = set.file_by_name("google/protobuf/empty.proto").unwrap();
    assert!(!empty.has_source_info());
    assert_eq!(file_package(empty), Span::ZERO);
}

#[test]
fn comments_survive_a_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("set.json");
    let original = load_file(
        std::path::Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/linter.json"
        )),
        "linter.proto",
    )
    .unwrap();

    let set = FileDescriptorSet {
        file: vec![original.clone()],
    };
    fs::write(&path, serde_json::to_string_pretty(&set).unwrap()).unwrap();

    let reloaded = load_file(&path, "linter.proto").unwrap();
    assert_eq!(reloaded.source_locations(), original.source_locations());
    assert_eq!(
        reloaded.source_locations()[1].leading_comments.as_deref(),
        Some(" proto3 rules!\n")
    );
}

#[test]
fn invalid_json_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{\"file\": [").unwrap();

    let err = load_descriptor_set(&path).unwrap_err();
    assert!(matches!(err, LocationError::DescriptorParseError { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_descriptor_set(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LocationError::DescriptorNotFound { .. }));
}
