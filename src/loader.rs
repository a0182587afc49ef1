//! Descriptor set loading.
//!
//! Descriptor sets are read from the protobuf JSON form written by schema
//! compilers, e.g. `buf build --as-file-descriptor-set -o set.json`.
//! Source-info tables are only present when the compiler was asked to keep
//! them.

use std::fs;
use std::path::Path;

use crate::descriptor::{FileDescriptorProto, FileDescriptorSet};
use crate::error::{LocationError, Result};

/// Load a descriptor set from a JSON file.
///
/// # Errors
///
/// Returns `DescriptorNotFound` if the file doesn't exist.
/// Returns `DescriptorParseError` if the JSON is invalid.
pub fn load_descriptor_set(path: &Path) -> Result<FileDescriptorSet> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LocationError::DescriptorNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LocationError::Io(e)
        }
    })?;

    parse_descriptor_set(&content, path)
}

/// Parse JSON content into a descriptor set.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_descriptor_set(content: &str, source_path: &Path) -> Result<FileDescriptorSet> {
    let set: FileDescriptorSet =
        serde_json::from_str(content).map_err(|e| LocationError::DescriptorParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        "Loaded {} file(s) from {}",
        set.len(),
        source_path.display()
    );

    Ok(set)
}

/// Load a descriptor set and take one file out of it.
///
/// # Errors
///
/// Returns `FileNotInSet` if no file in the set is named `name`, plus any
/// error from [`load_descriptor_set`].
pub fn load_file(path: &Path, name: &str) -> Result<FileDescriptorProto> {
    let set = load_descriptor_set(path)?;
    set.file
        .into_iter()
        .find(|f| f.name.as_deref() == Some(name))
        .ok_or_else(|| LocationError::FileNotInSet {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SET: &str = r#"{
        "file": [
            {
                "name": "a.proto",
                "package": "acme.v1",
                "sourceCodeInfo": {"location": [{"path": [2], "span": [2, 0, 16]}]}
            },
            {"name": "b.proto"}
        ]
    }"#;

    #[test]
    fn parse_valid_set() {
        let set = parse_descriptor_set(SET, &PathBuf::from("set.json")).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.file_by_name("a.proto").unwrap().has_source_info());
        assert!(!set.file_by_name("b.proto").unwrap().has_source_info());
    }

    #[test]
    fn parse_empty_object_is_empty_set() {
        let set = parse_descriptor_set("{}", &PathBuf::from("set.json")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn parse_invalid_json_returns_error() {
        let result = parse_descriptor_set("{ file: [", &PathBuf::from("broken.json"));

        assert!(matches!(
            result,
            Err(LocationError::DescriptorParseError { ref path, .. }) if path == &PathBuf::from("broken.json")
        ));
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_descriptor_set(&temp.path().join("missing.json"));

        assert!(matches!(
            result,
            Err(LocationError::DescriptorNotFound { .. })
        ));
    }

    #[test]
    fn load_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("set.json");
        fs::write(&path, SET).unwrap();

        let file = load_file(&path, "a.proto").unwrap();
        assert_eq!(file.package.as_deref(), Some("acme.v1"));
    }

    #[test]
    fn load_file_not_in_set() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("set.json");
        fs::write(&path, SET).unwrap();

        let result = load_file(&path, "c.proto");
        assert!(matches!(
            result,
            Err(LocationError::FileNotInSet { ref name }) if name == "c.proto"
        ));
    }
}
