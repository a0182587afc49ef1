//! Source locations of well-known file elements.
//!
//! Each accessor resolves one fixed descriptor path and returns the span the
//! parser recorded for it. When there is no record (a synthetic file, or an
//! element the source never wrote) the accessor returns [`Span::ZERO`].
//!
//! The fixed paths live in one table. Supporting another language option
//! means adding a [`FileElement`] variant and its table row.
//!
//! # Example
//!
//! ```
//! use proto_locations::{file_package, FileDescriptorProto, Location, Span};
//!
//! let file = FileDescriptorProto::new("acme.proto")
//!     .with_source_info(vec![Location::new(&[2], &[3, 0, 17])]);
//! assert_eq!(file_package(&file), Span::single_line(3, 0, 17));
//!
//! let synthetic = FileDescriptorProto::new("built.proto");
//! assert_eq!(file_package(&synthetic), Span::ZERO);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::descriptor::{FileDescriptorProto, Location};
use crate::error::LocationError;
use crate::path::{file, file_options};
use crate::resolver::find_location;
use crate::span::Span;

/// A file-level element with a fixed descriptor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileElement {
    /// The `syntax = "...";` statement.
    Syntax,
    /// The `package ...;` statement.
    Package,
    /// `option csharp_namespace = "...";`
    CsharpNamespace,
    /// `option java_package = "...";`
    JavaPackage,
    /// `option php_namespace = "...";`
    PhpNamespace,
    /// `option ruby_package = "...";`
    RubyPackage,
    /// `option go_package = "...";`
    GoPackage,
    /// `option java_outer_classname = "...";`
    JavaOuterClassname,
    /// `option objc_class_prefix = "...";`
    ObjcClassPrefix,
    /// `option swift_prefix = "...";`
    SwiftPrefix,
    /// `option php_class_prefix = "...";`
    PhpClassPrefix,
    /// `option php_metadata_namespace = "...";`
    PhpMetadataNamespace,
}

struct WellKnownPath {
    element: FileElement,
    name: &'static str,
    path: &'static [i32],
}

// Rows are in `FileElement` declaration order.
const WELL_KNOWN_PATHS: &[WellKnownPath] = &[
    WellKnownPath {
        element: FileElement::Syntax,
        name: "syntax",
        path: &[file::SYNTAX],
    },
    WellKnownPath {
        element: FileElement::Package,
        name: "package",
        path: &[file::PACKAGE],
    },
    WellKnownPath {
        element: FileElement::CsharpNamespace,
        name: "csharp_namespace",
        path: &[file::OPTIONS, file_options::CSHARP_NAMESPACE],
    },
    WellKnownPath {
        element: FileElement::JavaPackage,
        name: "java_package",
        path: &[file::OPTIONS, file_options::JAVA_PACKAGE],
    },
    WellKnownPath {
        element: FileElement::PhpNamespace,
        name: "php_namespace",
        path: &[file::OPTIONS, file_options::PHP_NAMESPACE],
    },
    WellKnownPath {
        element: FileElement::RubyPackage,
        name: "ruby_package",
        path: &[file::OPTIONS, file_options::RUBY_PACKAGE],
    },
    WellKnownPath {
        element: FileElement::GoPackage,
        name: "go_package",
        path: &[file::OPTIONS, file_options::GO_PACKAGE],
    },
    WellKnownPath {
        element: FileElement::JavaOuterClassname,
        name: "java_outer_classname",
        path: &[file::OPTIONS, file_options::JAVA_OUTER_CLASSNAME],
    },
    WellKnownPath {
        element: FileElement::ObjcClassPrefix,
        name: "objc_class_prefix",
        path: &[file::OPTIONS, file_options::OBJC_CLASS_PREFIX],
    },
    WellKnownPath {
        element: FileElement::SwiftPrefix,
        name: "swift_prefix",
        path: &[file::OPTIONS, file_options::SWIFT_PREFIX],
    },
    WellKnownPath {
        element: FileElement::PhpClassPrefix,
        name: "php_class_prefix",
        path: &[file::OPTIONS, file_options::PHP_CLASS_PREFIX],
    },
    WellKnownPath {
        element: FileElement::PhpMetadataNamespace,
        name: "php_metadata_namespace",
        path: &[file::OPTIONS, file_options::PHP_METADATA_NAMESPACE],
    },
];

impl FileElement {
    /// Iterate over every well-known element, in table order.
    pub fn all() -> impl Iterator<Item = FileElement> {
        WELL_KNOWN_PATHS.iter().map(|row| row.element)
    }

    fn row(self) -> &'static WellKnownPath {
        &WELL_KNOWN_PATHS[self as usize]
    }

    /// The fixed descriptor path of this element.
    pub fn path(self) -> &'static [i32] {
        self.row().path
    }

    /// The snake_case name of this element, as written in the schema.
    pub fn name(self) -> &'static str {
        self.row().name
    }
}

impl fmt::Display for FileElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FileElement {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WELL_KNOWN_PATHS
            .iter()
            .find(|row| row.name == s)
            .map(|row| row.element)
            .ok_or_else(|| LocationError::UnknownElement {
                name: s.to_string(),
            })
    }
}

/// Span at `path`, or [`Span::ZERO`] when there is no usable record.
fn span_or_zero(file: &FileDescriptorProto, path: &[i32]) -> Span {
    let Some(loc) = find_location(file, path) else {
        return Span::ZERO;
    };

    match loc.span() {
        Ok(span) => span,
        Err(e) => {
            tracing::warn!(
                "Ignoring location record in {}: {}",
                file.file_name(),
                e
            );
            Span::ZERO
        }
    }
}

/// The location record of a well-known element, with its comments.
pub fn element_record(file: &FileDescriptorProto, element: FileElement) -> Option<&Location> {
    find_location(file, element.path())
}

/// The span of a well-known element, or [`Span::ZERO`] if it has none.
pub fn element_location(file: &FileDescriptorProto, element: FileElement) -> Span {
    span_or_zero(file, element.path())
}

/// Spans of every well-known element, in table order.
pub fn element_locations(file: &FileDescriptorProto) -> Vec<(FileElement, Span)> {
    FileElement::all()
        .map(|element| (element, element_location(file, element)))
        .collect()
}

/// Span of the whole file.
pub fn file_location(file: &FileDescriptorProto) -> Span {
    span_or_zero(file, &[])
}

/// Span of the `index`-th `import` statement.
pub fn file_import(file: &FileDescriptorProto, index: usize) -> Span {
    match i32::try_from(index) {
        Ok(index) => span_or_zero(file, &[file::DEPENDENCY, index]),
        Err(_) => Span::ZERO,
    }
}

/// Span of the `syntax` statement.
pub fn file_syntax(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::Syntax)
}

/// Span of the `package` statement.
pub fn file_package(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::Package)
}

/// Span of the `csharp_namespace` option statement.
pub fn file_csharp_namespace(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::CsharpNamespace)
}

/// Span of the `java_package` option statement.
pub fn file_java_package(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::JavaPackage)
}

/// Span of the `php_namespace` option statement.
pub fn file_php_namespace(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::PhpNamespace)
}

/// Span of the `ruby_package` option statement.
pub fn file_ruby_package(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::RubyPackage)
}

/// Span of the `go_package` option statement.
pub fn file_go_package(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::GoPackage)
}

/// Span of the `java_outer_classname` option statement.
pub fn file_java_outer_classname(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::JavaOuterClassname)
}

/// Span of the `objc_class_prefix` option statement.
pub fn file_objc_class_prefix(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::ObjcClassPrefix)
}

/// Span of the `swift_prefix` option statement.
pub fn file_swift_prefix(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::SwiftPrefix)
}

/// Span of the `php_class_prefix` option statement.
pub fn file_php_class_prefix(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::PhpClassPrefix)
}

/// Span of the `php_metadata_namespace` option statement.
pub fn file_php_metadata_namespace(file: &FileDescriptorProto) -> Span {
    element_location(file, FileElement::PhpMetadataNamespace)
}
