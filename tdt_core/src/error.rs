//! Error types for the tdt_core crate.

/// Error type for calendar export.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Returned when an export is requested before a room has been chosen.
    #[error("no room selected")]
    NoRoomSelected,
}
