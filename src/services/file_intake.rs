//! File intake: owns the single selected file and the drop zone's drag state.
//!
//! Pure state; no I/O. Whether a selection leads to a submission is decided by
//! the session layer, not here.

use crate::models::file::{DragEvent, PickerEvent, SelectedFile};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// What the drop zone should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeView {
    Empty,
    Selected { name: String, size_label: String },
}

#[derive(Debug, Default)]
pub struct FileIntake {
    selected: Option<SelectedFile>,
    dragging: bool,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_drag_over(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        self.dragging = true;
    }

    pub fn on_drag_leave(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        self.dragging = false;
    }

    /// Accept the first dropped item if it is a video; ignore anything else.
    ///
    /// Returns `true` when the selection was replaced.
    pub fn on_drop(&mut self, event: &mut DragEvent) -> bool {
        event.prevent_default();
        self.dragging = false;

        match event.items.first() {
            Some(item) if item.is_video() => {
                log::debug!("Accepted dropped file '{}' ({})", item.name, item.mime_type);
                self.selected = Some(item.clone());
                true
            }
            Some(item) => {
                log::debug!(
                    "Ignored dropped file '{}' with non-video type '{}'",
                    item.name,
                    item.mime_type
                );
                false
            }
            None => false,
        }
    }

    /// Select the first picked file. The picker path applies no type filter.
    pub fn on_file_picked(&mut self, event: PickerEvent) -> Option<&SelectedFile> {
        let file = event.files.into_iter().next()?;
        log::debug!("Picked file '{}' ({} bytes)", file.name, file.size);
        self.selected = Some(file);
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn view(&self) -> IntakeView {
        match &self.selected {
            None => IntakeView::Empty,
            Some(file) => IntakeView::Selected {
                name: file.name.clone(),
                size_label: format_mebibytes(file.size),
            },
        }
    }
}

/// Size in mebibytes with two decimals, e.g. `10.00 MB` for 10,485,760 bytes.
pub fn format_mebibytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MIB)
}

/// Human-readable size, stepping through units by powers of 1024.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} PB", size)
}
