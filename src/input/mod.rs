//! Input handling
//! File type detection, the upload form state and the drop zone

pub mod drop_zone;
pub mod file_detector;
pub mod upload;

pub use drop_zone::DropZone;
pub use upload::{AnalysisUpload, FileInput, SelectedFile, UploadState};
