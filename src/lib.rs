//! proto-locations - Source locations for protobuf schema elements.
//!
//! Tools that analyze `.proto` files (linters, documentation generators,
//! editor integrations) work on parsed descriptors, but need to report
//! problems against the text the user wrote. This crate maps a descriptor
//! path to the span the parser recorded in the file's source-info table.
//!
//! # Modules
//!
//! - [`descriptor`] - Descriptor tree and source-info input model
//! - [`error`] - Error types and result aliases
//! - [`loader`] - Loading descriptor sets from JSON
//! - [`locations`] - Spans of well-known file elements
//! - [`path`] - Descriptor field numbers and path validation
//! - [`resolver`] - Exact-match path resolution
//! - [`span`] - Normalized source spans
//!
//! # Example
//!
//! ```
//! use proto_locations::{file_syntax, find_location, FileDescriptorProto, Location, Span};
//!
//! let file = FileDescriptorProto::new("acme.proto").with_source_info(vec![
//!     Location::new(&[12], &[1, 0, 18]),
//!     Location::new(&[2], &[3, 0, 26]),
//! ]);
//!
//! assert_eq!(file_syntax(&file), Span::single_line(1, 0, 18));
//! assert!(find_location(&file, &[6, 0]).is_none());
//! ```

pub mod descriptor;
pub mod error;
pub mod loader;
pub mod locations;
pub mod path;
pub mod resolver;
pub mod span;

pub use descriptor::{FileDescriptorProto, FileDescriptorSet, FileOptions, Location, SourceCodeInfo};
pub use error::{LocationError, Result};
pub use loader::{load_descriptor_set, load_file, parse_descriptor_set};
pub use locations::{
    element_location, element_locations, element_record, file_csharp_namespace, file_go_package,
    file_import, file_java_outer_classname, file_java_package, file_location,
    file_objc_class_prefix, file_package, file_php_class_prefix, file_php_metadata_namespace,
    file_php_namespace, file_ruby_package, file_swift_prefix, file_syntax, FileElement,
};
pub use resolver::{find_location, resolve_location};
pub use span::Span;
