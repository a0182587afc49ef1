//! Descriptor paths.
//!
//! A path addresses one node of a file descriptor by the numbering of
//! `descriptor.proto` itself: a field number, followed by a zero-based index
//! when that field is repeated, and so on downwards. For example `[4, 0, 2, 1]`
//! is the second field of the first message, and `[8, 37]` is the
//! `csharp_namespace` option of the file.
//!
//! Only the first two levels are checked by [`validate_path`]. Anything
//! deeper is matched as-is.

use std::fmt;

use crate::error::{LocationError, Result};

/// `FileDescriptorProto` field numbers.
pub mod file {
    pub const NAME: i32 = 1;
    pub const PACKAGE: i32 = 2;
    pub const DEPENDENCY: i32 = 3;
    pub const MESSAGE_TYPE: i32 = 4;
    pub const ENUM_TYPE: i32 = 5;
    pub const SERVICE: i32 = 6;
    pub const EXTENSION: i32 = 7;
    pub const OPTIONS: i32 = 8;
    pub const SOURCE_CODE_INFO: i32 = 9;
    pub const PUBLIC_DEPENDENCY: i32 = 10;
    pub const WEAK_DEPENDENCY: i32 = 11;
    pub const SYNTAX: i32 = 12;
    pub const EDITION: i32 = 14;

    pub(crate) const ALL: &[i32] = &[
        NAME,
        PACKAGE,
        DEPENDENCY,
        MESSAGE_TYPE,
        ENUM_TYPE,
        SERVICE,
        EXTENSION,
        OPTIONS,
        SOURCE_CODE_INFO,
        PUBLIC_DEPENDENCY,
        WEAK_DEPENDENCY,
        SYNTAX,
        EDITION,
    ];
}

/// `FileOptions` field numbers.
pub mod file_options {
    pub const JAVA_PACKAGE: i32 = 1;
    pub const JAVA_OUTER_CLASSNAME: i32 = 8;
    pub const OPTIMIZE_FOR: i32 = 9;
    pub const JAVA_MULTIPLE_FILES: i32 = 10;
    pub const GO_PACKAGE: i32 = 11;
    pub const CC_GENERIC_SERVICES: i32 = 16;
    pub const JAVA_GENERIC_SERVICES: i32 = 17;
    pub const PY_GENERIC_SERVICES: i32 = 18;
    pub const JAVA_GENERATE_EQUALS_AND_HASH: i32 = 20;
    pub const DEPRECATED: i32 = 23;
    pub const JAVA_STRING_CHECK_UTF8: i32 = 27;
    pub const CC_ENABLE_ARENAS: i32 = 31;
    pub const OBJC_CLASS_PREFIX: i32 = 36;
    pub const CSHARP_NAMESPACE: i32 = 37;
    pub const SWIFT_PREFIX: i32 = 39;
    pub const PHP_CLASS_PREFIX: i32 = 40;
    pub const PHP_NAMESPACE: i32 = 41;
    pub const PHP_GENERIC_SERVICES: i32 = 42;
    pub const PHP_METADATA_NAMESPACE: i32 = 44;
    pub const RUBY_PACKAGE: i32 = 45;
    pub const FEATURES: i32 = 50;
    pub const UNINTERPRETED_OPTION: i32 = 999;

    /// Custom options are extensions and start here.
    pub const FIRST_EXTENSION: i32 = 1000;

    pub(crate) const ALL: &[i32] = &[
        JAVA_PACKAGE,
        JAVA_OUTER_CLASSNAME,
        OPTIMIZE_FOR,
        JAVA_MULTIPLE_FILES,
        GO_PACKAGE,
        CC_GENERIC_SERVICES,
        JAVA_GENERIC_SERVICES,
        PY_GENERIC_SERVICES,
        JAVA_GENERATE_EQUALS_AND_HASH,
        DEPRECATED,
        JAVA_STRING_CHECK_UTF8,
        CC_ENABLE_ARENAS,
        OBJC_CLASS_PREFIX,
        CSHARP_NAMESPACE,
        SWIFT_PREFIX,
        PHP_CLASS_PREFIX,
        PHP_NAMESPACE,
        PHP_GENERIC_SERVICES,
        PHP_METADATA_NAMESPACE,
        RUBY_PACKAGE,
        FEATURES,
        UNINTERPRETED_OPTION,
    ];
}

/// Check a path before it is used for lookup.
///
/// The empty path is valid and addresses the whole file.
///
/// # Errors
///
/// Returns `NegativePathComponent` for any negative value, and
/// `UnknownFieldNumber` when the root field is not a `FileDescriptorProto`
/// field, or when an options path names a field `FileOptions` does not have.
pub fn validate_path(path: &[i32]) -> Result<()> {
    if let Some((index, &value)) = path.iter().enumerate().find(|(_, v)| **v < 0) {
        return Err(LocationError::NegativePathComponent { index, value });
    }

    let Some(&root) = path.first() else {
        return Ok(());
    };

    if !file::ALL.contains(&root) {
        return Err(LocationError::UnknownFieldNumber {
            scope: "FileDescriptorProto",
            number: root,
        });
    }

    if root == file::OPTIONS {
        if let Some(&option) = path.get(1) {
            if option < file_options::FIRST_EXTENSION && !file_options::ALL.contains(&option) {
                return Err(LocationError::UnknownFieldNumber {
                    scope: "FileOptions",
                    number: option,
                });
            }
        }
    }

    Ok(())
}

/// Formats a path as `[4, 0, 2]` for log and error output.
#[derive(Debug, Clone, Copy)]
pub struct SourcePath<'a>(pub &'a [i32]);

impl fmt::Display for SourcePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, "]")
    }
}
