//! Path resolution.
//!
//! Maps a descriptor path to the location record the parser emitted for it.
//! Matching is exact: the record's path must have the same length and the
//! same values in the same order. A deeper record never answers a request
//! for its parent.
//!
//! Parsers may emit several records for one path (protoc writes a `[8]`
//! record for every `option` statement). The first one in table order wins.

use crate::descriptor::{FileDescriptorProto, Location};
use crate::error::Result;
use crate::path::{validate_path, SourcePath};

/// Find the first location record whose path equals `path`.
///
/// Returns `None` when the file has no source info, or when no record
/// carries this exact path.
pub fn find_location<'a>(file: &'a FileDescriptorProto, path: &[i32]) -> Option<&'a Location> {
    let found = file
        .source_locations()
        .iter()
        .find(|loc| loc.path.as_slice() == path);

    if found.is_none() {
        tracing::trace!(
            "No location for path {} in {}",
            SourcePath(path),
            file.file_name()
        );
    }

    found
}

/// Validate `path`, then find its location record.
///
/// # Errors
///
/// Returns `NegativePathComponent` or `UnknownFieldNumber` for paths that
/// cannot address any node. A valid path with no record is `Ok(None)`.
pub fn resolve_location<'a>(
    file: &'a FileDescriptorProto,
    path: &[i32],
) -> Result<Option<&'a Location>> {
    validate_path(path)?;
    Ok(find_location(file, path))
}
