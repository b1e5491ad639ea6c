use contracts::usecases::u102_upload_slides::UploadSlidesResponse;

use crate::shared::error::ApiError;

/// A file picked by the user. `web_sys::File` in the browser, anything with a name in tests.
pub trait SelectedFile {
    fn name(&self) -> String;
}

impl SelectedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// Outcome of the last send, shown under the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Sent,
    Failed,
    NoFiles,
}

impl UploadStatus {
    pub fn message(&self) -> &'static str {
        match self {
            UploadStatus::Sent => "Files sent successfully!",
            UploadStatus::Failed => "Error sending files. Please try again.",
            UploadStatus::NoFiles => "Error: no files selected. Please choose a file first.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, UploadStatus::Sent)
    }
}

#[derive(Debug, Clone)]
pub struct UploadState<F> {
    pub files: Vec<F>,
    pub is_loading: bool,
    pub status: Option<UploadStatus>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            is_loading: false,
            status: None,
        }
    }
}

impl<F: SelectedFile + Clone> UploadState<F> {
    pub fn add_file(&mut self, file: F) {
        self.files.push(file);
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(SelectedFile::name).collect()
    }

    /// Returns the batch to send, or `None` when nothing should go over the network
    pub fn begin_send(&mut self) -> Option<Vec<F>> {
        if self.is_loading {
            return None;
        }
        if self.files.is_empty() {
            self.status = Some(UploadStatus::NoFiles);
            return None;
        }

        self.status = None;
        self.is_loading = true;
        Some(self.files.clone())
    }

    /// The batch succeeds or fails as a whole
    pub fn complete(&mut self, result: Result<UploadSlidesResponse, ApiError>) {
        match result {
            Ok(ack) => {
                log::debug!("Upload response: {:?}", ack);
                self.files.clear();
                self.status = Some(UploadStatus::Sent);
            }
            Err(e) => {
                match e.status() {
                    Some(status) => log::error!("Error sending files: backend answered {}", status),
                    None => log::error!("Error sending files: {}", e),
                }
                self.status = Some(UploadStatus::Failed);
            }
        }
        self.is_loading = false;
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.status.map(|s| s.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct NamedFile(&'static str);

    impl SelectedFile for NamedFile {
        fn name(&self) -> String {
            self.0.to_string()
        }
    }

    fn with_files(names: &[&'static str]) -> UploadState<NamedFile> {
        let mut state = UploadState::default();
        for name in names {
            state.add_file(NamedFile(name));
        }
        state
    }

    fn ack() -> Result<UploadSlidesResponse, ApiError> {
        Ok(UploadSlidesResponse {
            status: "received".into(),
            filename: Some("week1.pdf".into()),
        })
    }

    #[test]
    fn test_files_keep_selection_order() {
        let state = with_files(&["week1.pdf", "week2.pdf", "week1.pdf"]);
        assert_eq!(state.file_names(), vec!["week1.pdf", "week2.pdf", "week1.pdf"]);
    }

    #[test]
    fn test_begin_send_returns_batch() {
        let mut state = with_files(&["a.pdf", "b.pdf"]);
        let batch = state.begin_send().unwrap();
        assert_eq!(batch, vec![NamedFile("a.pdf"), NamedFile("b.pdf")]);
        assert!(state.is_loading);
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_no_second_send_while_in_flight() {
        let mut state = with_files(&["a.pdf"]);
        state.begin_send().unwrap();
        assert!(state.begin_send().is_none());
    }

    #[test]
    fn test_empty_selection_reports_error_without_sending() {
        let mut state = with_files(&[]);
        assert!(state.begin_send().is_none());
        assert!(!state.is_loading);
        assert!(state.status_message().unwrap().contains("Error"));
    }

    #[test]
    fn test_success_clears_files() {
        let mut state = with_files(&["a.pdf", "b.pdf"]);
        state.begin_send().unwrap();
        state.complete(ack());

        assert!(state.files.is_empty());
        assert!(!state.is_loading);
        let message = state.status_message().unwrap();
        assert!(!message.contains("Error"));
        assert_eq!(message, "Files sent successfully!");
    }

    #[test]
    fn test_failure_keeps_files() {
        let mut state = with_files(&["a.pdf", "b.pdf"]);
        state.begin_send().unwrap();
        state.complete(Err(ApiError::Http { status: 422 }));

        assert_eq!(state.file_names(), vec!["a.pdf", "b.pdf"]);
        assert!(!state.is_loading);
        assert!(state.status.unwrap().is_error());
        assert!(state.status_message().unwrap().contains("Error"));
    }

    #[test]
    fn test_retry_after_failure_clears_old_status() {
        let mut state = with_files(&["a.pdf"]);
        state.begin_send().unwrap();
        state.complete(Err(ApiError::network("offline")));
        state.begin_send().unwrap();
        assert_eq!(state.status, None);
        state.complete(ack());
        assert_eq!(state.status, Some(UploadStatus::Sent));
    }
}
