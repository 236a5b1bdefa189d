//! Upload state: the chosen resume file and the target job role

use crate::error::Result;
use crate::input::file_detector::FileType;
use log::debug;
use std::path::Path;
use tokio::fs;

/// A resume file held in memory, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = FileType::from_name(&name).content_type().to_string();
        Self { name, content_type, bytes }
    }

    /// Read a file from disk. Type and size are left for the server to judge.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        debug!("Loaded {} ({} bytes)", name, bytes.len());
        Ok(Self::new(name, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The form's file input. Its file list is the single source of truth the
/// submission reads, whether files were browsed or dropped.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    files: Vec<SelectedFile>,
}

impl FileInput {
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    pub fn first(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// What the user has entered into the upload form.
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub file_input: FileInput,
    job_role: String,
}

/// A complete submission: exactly one file and a non-empty role.
#[derive(Debug, Clone)]
pub struct AnalysisUpload {
    pub file: SelectedFile,
    pub job_role: String,
}

impl UploadState {
    pub fn select_job_role(&mut self, role: &str) {
        self.job_role = role.trim().to_string();
    }

    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file_input.first()
    }

    /// `None` when either the file or the role is missing.
    pub fn submission(&self) -> Option<AnalysisUpload> {
        let file = self.selected_file()?;
        if self.job_role.is_empty() {
            return None;
        }
        Some(AnalysisUpload {
            file: file.clone(),
            job_role: self.job_role.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_submission_requires_file_and_role() {
        let mut state = UploadState::default();
        assert!(state.submission().is_none());

        state.select_job_role("  Data Scientist ");
        assert!(state.submission().is_none());

        state.file_input.set_files(vec![SelectedFile::new("cv.pdf", vec![1, 2, 3])]);
        let upload = state.submission().unwrap();
        assert_eq!(upload.job_role, "Data Scientist");
        assert_eq!(upload.file.content_type, "application/pdf");

        state.select_job_role("");
        assert!(state.submission().is_none());
    }

    #[test]
    fn test_first_file_is_submitted() {
        let mut state = UploadState::default();
        state.select_job_role("Web Developer");
        state.file_input.set_files(vec![
            SelectedFile::new("a.docx", vec![1]),
            SelectedFile::new("b.pdf", vec![2]),
        ]);
        assert_eq!(state.submission().unwrap().file.name, "a.docx");
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let mut tmp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(tmp, "Jane Doe\nPython, SQL").unwrap();

        let file = SelectedFile::load(tmp.path()).await.unwrap();
        assert!(file.name.ends_with(".txt"));
        assert_eq!(file.content_type, "text/plain");
        assert_eq!(file.size(), 20);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert!(SelectedFile::load(Path::new("tests/fixtures/nonexistent.pdf")).await.is_err());
    }
}
