//! Error handling for pagemark.
//!
//! The editing core is deliberately forgiving: stale element ids, tiny
//! gestures, and out-of-range moves are handled by no-ops and clamping,
//! never by errors. The only raising path is malformed external input at
//! the persistence boundary.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Persistence payload error
///
/// Raised when a project-state payload handed to the core by the external
/// save/load API cannot be interpreted.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Payload version is newer than this build understands
    #[error("Unsupported project version {version} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the payload.
        version: u32,
        /// The version this build writes.
        expected: u32,
    },

    /// Payload declares no pages
    #[error("Project declares no pages")]
    MissingPages,

    /// An element references a page outside the document
    #[error("Element {id} references page {page}, document has {num_pages} pages")]
    PageOutOfRange {
        /// The element id.
        id: u64,
        /// The referenced page number.
        page: u32,
        /// The declared page count.
        num_pages: u32,
    },

    /// JSON (de)serialization failure
    #[error("Invalid project payload: {0}")]
    Json(#[from] serde_json::Error),
}

