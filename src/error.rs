//! Error types for location resolution.
//!
//! This module defines [`LocationError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A path with no matching location record is *not* an error; resolution
//!   returns `None` and the named accessors fall back to a zero span
//! - Use `LocationError` for caller contract violations (malformed paths or
//!   spans) and for failures loading a descriptor set
//! - Use `anyhow::Error` (via `LocationError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for location resolution.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Descriptor set file not found at the given location.
    #[error("Descriptor set not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    /// Failed to parse a descriptor set.
    #[error("Failed to parse descriptor set at {path}: {message}")]
    DescriptorParseError { path: PathBuf, message: String },

    /// The descriptor set does not contain the requested file.
    #[error("File not in descriptor set: {name}")]
    FileNotInSet { name: String },

    /// A path component was negative.
    #[error("Negative path component {value} at index {index}")]
    NegativePathComponent { index: usize, value: i32 },

    /// A path component names a field the descriptor format does not define.
    #[error("Unknown field number {number} in {scope}")]
    UnknownFieldNumber { scope: &'static str, number: i32 },

    /// No well-known element goes by this name.
    #[error("Unknown file element: {name}")]
    UnknownElement { name: String },

    /// A location record's span is neither 3 nor 4 integers long.
    #[error("Malformed span: expected 3 or 4 integers, got {len}")]
    MalformedSpan { len: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for location operations.
pub type Result<T> = std::result::Result<T, LocationError>;
