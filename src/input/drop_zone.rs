//! Drop zone: click-to-browse and drag-and-drop file acquisition

use crate::input::upload::{FileInput, SelectedFile};
use log::info;

/// Visual state of the drop zone. Acquiring a file only changes how the
/// zone looks; nothing is validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct DropZone {
    dragover: bool,
    filled: bool,
    file_label: String,
    hint_visible: bool,
}

impl Default for DropZone {
    fn default() -> Self {
        Self {
            dragover: false,
            filled: false,
            file_label: String::new(),
            hint_visible: true,
        }
    }
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_over(&mut self) {
        self.dragover = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragover = false;
    }

    /// Dropped files replace the input's file list. Returns whether a file
    /// was acquired.
    pub fn drop(&mut self, input: &mut FileInput, files: Vec<SelectedFile>) -> bool {
        self.dragover = false;
        if files.is_empty() {
            return false;
        }
        input.set_files(files);
        self.refresh(input);
        true
    }

    /// Files chosen through the browse dialog opened by clicking the zone.
    /// An empty choice (dialog dismissed) leaves everything as it was.
    pub fn browse(&mut self, input: &mut FileInput, files: Vec<SelectedFile>) -> bool {
        if files.is_empty() {
            return false;
        }
        input.set_files(files);
        self.refresh(input);
        true
    }

    fn refresh(&mut self, input: &FileInput) {
        if let Some(file) = input.first() {
            info!("Resume selected: {}", file.name);
            self.file_label = file.name.clone();
            self.filled = true;
            self.hint_visible = false;
        }
    }

    pub fn is_dragover(&self) -> bool {
        self.dragover
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, b"resume".to_vec())
    }

    #[test]
    fn test_drag_highlight() {
        let mut zone = DropZone::new();
        zone.drag_over();
        assert!(zone.is_dragover());
        zone.drag_leave();
        assert!(!zone.is_dragover());
    }

    #[test]
    fn test_drop_replaces_input_files() {
        let mut zone = DropZone::new();
        let mut input = FileInput::default();
        zone.browse(&mut input, vec![file("old.pdf")]);

        zone.drag_over();
        assert!(zone.drop(&mut input, vec![file("new.docx"), file("extra.pdf")]));

        assert!(!zone.is_dragover());
        assert!(zone.is_filled());
        assert!(!zone.hint_visible());
        assert_eq!(zone.file_label(), "new.docx");
        assert_eq!(input.len(), 2);
        assert_eq!(input.first().unwrap().name, "new.docx");
    }

    #[test]
    fn test_empty_drop_only_clears_highlight() {
        let mut zone = DropZone::new();
        let mut input = FileInput::default();
        zone.drag_over();
        assert!(!zone.drop(&mut input, Vec::new()));

        assert!(!zone.is_dragover());
        assert!(!zone.is_filled());
        assert!(zone.hint_visible());
        assert!(input.is_empty());
    }

    #[test]
    fn test_dismissed_browse_keeps_selection() {
        let mut zone = DropZone::new();
        let mut input = FileInput::default();
        zone.browse(&mut input, vec![file("cv.pdf")]);
        assert!(!zone.browse(&mut input, Vec::new()));
        assert_eq!(zone.file_label(), "cv.pdf");
        assert_eq!(input.len(), 1);
    }
}
