//! Selected file model and the intake events that carry it.

use serde::{Deserialize, Serialize};

/// MIME prefix a dropped item must carry to be accepted.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// MIME type used when a file's type is unknown or cannot be parsed.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Handle to the file the user chose, either by dropping it or picking it.
///
/// `path` is where the bytes are read from when the file is submitted; the
/// other fields mirror what a browser `File` exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: String,
}

impl SelectedFile {
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with(VIDEO_MIME_PREFIX)
    }
}

/// A drag-over, drag-leave, or drop event on the drop zone.
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    /// Items carried by the drag, in the order the platform reported them.
    pub items: Vec<SelectedFile>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(items: Vec<SelectedFile>) -> Self {
        Self {
            items,
            default_prevented: false,
        }
    }

    /// Suppress the platform's default handling so the drop zone can accept the drop.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of the file-picker dialog.
#[derive(Debug, Clone, Default)]
pub struct PickerEvent {
    pub files: Vec<SelectedFile>,
}
