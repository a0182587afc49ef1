//! Descriptor tree input model.
//!
//! These types mirror the parts of `google/protobuf/descriptor.proto` that
//! location resolution needs, in the protobuf JSON mapping produced by
//! schema compilers (for example `buf build --as-file-descriptor-set`).
//! Keys are accepted in lowerCamelCase and in their original snake_case
//! spelling. Keys the crate does not model are ignored.
//!
//! Files built in code with [`FileDescriptorProto::new`] carry no
//! [`SourceCodeInfo`] unless one is attached explicitly, matching what
//! descriptor builders produce for synthetic files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::span::Span;

/// A set of parsed schema files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptorSet {
    #[serde(default)]
    pub file: Vec<FileDescriptorProto>,
}

impl FileDescriptorSet {
    /// Look up a file by its exact name.
    pub fn file_by_name(&self, name: &str) -> Option<&FileDescriptorProto> {
        self.file.iter().find(|f| f.name.as_deref() == Some(name))
    }

    /// Iterate over all files in the set.
    pub fn iter(&self) -> impl Iterator<Item = &FileDescriptorProto> {
        self.file.iter()
    }

    /// Number of files in the set.
    pub fn len(&self) -> usize {
        self.file.len()
    }

    /// Check if the set holds no files.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }
}

/// One parsed schema file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptorProto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Imported file names, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency: Vec<String>,

    #[serde(default, alias = "message_type", skip_serializing_if = "Vec::is_empty")]
    pub message_type: Vec<DescriptorProto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FileOptions>,

    /// Absent for files that were not produced by a source-retaining parser.
    #[serde(
        default,
        alias = "source_code_info",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_code_info: Option<SourceCodeInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
}

impl FileDescriptorProto {
    /// Start building a synthetic file with no source info.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the syntax (`"proto2"` or `"proto3"`).
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Append an import.
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependency.push(dependency.into());
        self
    }

    /// Append an empty top-level message.
    pub fn with_message(mut self, name: impl Into<String>) -> Self {
        self.message_type.push(DescriptorProto {
            name: Some(name.into()),
            ..DescriptorProto::default()
        });
        self
    }

    /// Set the file options block.
    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Attach a source-info table.
    pub fn with_source_info(mut self, location: Vec<Location>) -> Self {
        self.source_code_info = Some(SourceCodeInfo { location });
        self
    }

    /// File name, or an empty string for unnamed files.
    pub fn file_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Whether the parser attached a source-info table (possibly empty).
    pub fn has_source_info(&self) -> bool {
        self.source_code_info.is_some()
    }

    /// Location records in parser order; empty when there is no table.
    pub fn source_locations(&self) -> &[Location] {
        self.source_code_info
            .as_ref()
            .map(|info| info.location.as_slice())
            .unwrap_or_default()
    }
}

/// A message definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorProto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<FieldDescriptorProto>,

    #[serde(default, alias = "nested_type", skip_serializing_if = "Vec::is_empty")]
    pub nested_type: Vec<DescriptorProto>,
}

/// A message field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptorProto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    #[serde(default, alias = "json_name", skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
}

/// File-level options.
///
/// The per-language namespace options are typed. Everything else, including
/// custom options rendered as `"[pkg.ext]"` keys, is kept in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    #[serde(default, alias = "java_package", skip_serializing_if = "Option::is_none")]
    pub java_package: Option<String>,

    #[serde(
        default,
        alias = "java_outer_classname",
        skip_serializing_if = "Option::is_none"
    )]
    pub java_outer_classname: Option<String>,

    #[serde(default, alias = "go_package", skip_serializing_if = "Option::is_none")]
    pub go_package: Option<String>,

    #[serde(
        default,
        alias = "objc_class_prefix",
        skip_serializing_if = "Option::is_none"
    )]
    pub objc_class_prefix: Option<String>,

    #[serde(
        default,
        alias = "csharp_namespace",
        skip_serializing_if = "Option::is_none"
    )]
    pub csharp_namespace: Option<String>,

    #[serde(default, alias = "swift_prefix", skip_serializing_if = "Option::is_none")]
    pub swift_prefix: Option<String>,

    #[serde(
        default,
        alias = "php_class_prefix",
        skip_serializing_if = "Option::is_none"
    )]
    pub php_class_prefix: Option<String>,

    #[serde(default, alias = "php_namespace", skip_serializing_if = "Option::is_none")]
    pub php_namespace: Option<String>,

    #[serde(
        default,
        alias = "php_metadata_namespace",
        skip_serializing_if = "Option::is_none"
    )]
    pub php_metadata_namespace: Option<String>,

    #[serde(default, alias = "ruby_package", skip_serializing_if = "Option::is_none")]
    pub ruby_package: Option<String>,

    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// The source-info table of a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceCodeInfo {
    #[serde(default)]
    pub location: Vec<Location>,
}

/// One location record: a structural path and where it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub path: Vec<i32>,

    /// Raw `[line, start_col, end_col]` or `[start_line, start_col, end_line, end_col]`.
    #[serde(default)]
    pub span: Vec<i32>,

    #[serde(
        default,
        alias = "leading_comments",
        skip_serializing_if = "Option::is_none"
    )]
    pub leading_comments: Option<String>,

    #[serde(
        default,
        alias = "trailing_comments",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_comments: Option<String>,

    #[serde(
        default,
        alias = "leading_detached_comments",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub leading_detached_comments: Vec<String>,
}

impl Location {
    /// Create a record with no comments.
    pub fn new(path: &[i32], span: &[i32]) -> Self {
        Self {
            path: path.to_vec(),
            span: span.to_vec(),
            ..Self::default()
        }
    }

    /// Attach a leading comment.
    pub fn with_leading_comments(mut self, comments: impl Into<String>) -> Self {
        self.leading_comments = Some(comments.into());
        self
    }

    /// Attach a trailing comment.
    pub fn with_trailing_comments(mut self, comments: impl Into<String>) -> Self {
        self.trailing_comments = Some(comments.into());
        self
    }

    /// The normalized span of this record.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSpan` if the raw span is not 3 or 4 integers.
    pub fn span(&self) -> Result<Span> {
        Span::from_raw(&self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_file_has_no_source_info() {
        let file = FileDescriptorProto::new("foo.proto")
            .with_package("acme.v1")
            .with_message("Foo");

        assert_eq!(file.file_name(), "foo.proto");
        assert_eq!(file.message_type.len(), 1);
        assert!(!file.has_source_info());
        assert!(file.source_locations().is_empty());
    }

    #[test]
    fn empty_table_still_counts_as_source_info() {
        let file = FileDescriptorProto::new("foo.proto").with_source_info(vec![]);

        assert!(file.has_source_info());
        assert!(file.source_locations().is_empty());
    }

    #[test]
    fn unnamed_file_has_empty_name() {
        assert_eq!(FileDescriptorProto::default().file_name(), "");
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let file: FileDescriptorProto = serde_json::from_str(
            r#"{
                "name": "a.proto",
                "messageType": [{"name": "Foo", "nestedType": [{"name": "Bar"}]}],
                "options": {"javaPackage": "com.acme", "goPackage": "acme/v1"},
                "sourceCodeInfo": {"location": [{"path": [2], "span": [0, 0, 10]}]}
            }"#,
        )
        .unwrap();

        assert_eq!(file.message_type[0].nested_type[0].name.as_deref(), Some("Bar"));
        let options = file.options.unwrap();
        assert_eq!(options.java_package.as_deref(), Some("com.acme"));
        assert_eq!(options.go_package.as_deref(), Some("acme/v1"));
        assert_eq!(file.source_code_info.unwrap().location.len(), 1);
    }

    #[test]
    fn deserializes_snake_case_keys() {
        let file: FileDescriptorProto = serde_json::from_str(
            r#"{
                "name": "a.proto",
                "message_type": [{"name": "Foo"}],
                "options": {"ruby_package": "Acme::V1"},
                "source_code_info": {"location": [
                    {"path": [12], "span": [0, 0, 18], "leading_comments": " hi\n"}
                ]}
            }"#,
        )
        .unwrap();

        assert_eq!(file.message_type.len(), 1);
        assert_eq!(
            file.options.as_ref().unwrap().ruby_package.as_deref(),
            Some("Acme::V1")
        );
        assert_eq!(
            file.source_locations()[0].leading_comments.as_deref(),
            Some(" hi\n")
        );
    }

    #[test]
    fn unknown_options_are_preserved() {
        let options: FileOptions = serde_json::from_str(
            r#"{"csharpNamespace": "Acme.V1", "ccEnableArenas": true, "[acme.ext]": {"a": 1}}"#,
        )
        .unwrap();

        assert_eq!(options.csharp_namespace.as_deref(), Some("Acme.V1"));
        assert_eq!(options.other["ccEnableArenas"], serde_json::json!(true));
        assert!(options.other.contains_key("[acme.ext]"));
    }

    #[test]
    fn comments_round_trip() {
        let loc = Location::new(&[4, 0], &[10, 0, 12, 1])
            .with_leading_comments(" A message.\n")
            .with_trailing_comments(" trailing\n");

        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();

        assert_eq!(back, loc);
        assert!(json.contains("leadingComments"));
    }

    #[test]
    fn location_span_normalizes() {
        let loc = Location::new(&[2], &[3, 0, 26]);
        assert_eq!(loc.span().unwrap(), Span::single_line(3, 0, 26));

        let bad = Location::new(&[2], &[3, 0]);
        assert!(bad.span().is_err());
    }

    #[test]
    fn builder_sets_syntax_and_options() {
        let file = FileDescriptorProto::new("acme.proto")
            .with_syntax("proto3")
            .with_options(FileOptions {
                go_package: Some("acme/v1;acmev1".into()),
                ..FileOptions::default()
            });

        assert_eq!(file.syntax.as_deref(), Some("proto3"));
        assert_eq!(
            file.options.unwrap().go_package.as_deref(),
            Some("acme/v1;acmev1")
        );
    }

    #[test]
    fn set_iterates_in_order() {
        let set = FileDescriptorSet {
            file: vec![
                FileDescriptorProto::new("a.proto"),
                FileDescriptorProto::new("b.proto"),
            ],
        };

        let names: Vec<_> = set.iter().map(FileDescriptorProto::file_name).collect();
        assert_eq!(names, vec!["a.proto", "b.proto"]);
    }

    #[test]
    fn set_finds_file_by_name() {
        let set = FileDescriptorSet {
            file: vec![
                FileDescriptorProto::new("a.proto"),
                FileDescriptorProto::new("b.proto"),
            ],
        };

        assert_eq!(set.len(), 2);
        assert!(set.file_by_name("b.proto").is_some());
        assert!(set.file_by_name("c.proto").is_none());
    }
}
