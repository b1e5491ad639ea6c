use serde::{Deserialize, Serialize};

/// How the selected files are packed into the `POST /upload_slides` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadEncoding {
    /// `multipart/form-data` with `file`, `course_id` and `lecture_title`
    #[default]
    Multipart,

    /// JSON `{ "text": ... }` with every file's contents concatenated
    Text,
}

impl UploadEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadEncoding::Multipart => "multipart",
            UploadEncoding::Text => "text",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "multipart" => Some(UploadEncoding::Multipart),
            "text" => Some(UploadEncoding::Text),
            _ => None,
        }
    }
}

/// Field names of the multipart variant
pub struct UploadSlidesForm;

impl UploadSlidesForm {
    pub const FILE: &'static str = "file";
    pub const COURSE_ID: &'static str = "course_id";
    pub const LECTURE_TITLE: &'static str = "lecture_title";

    /// Lecture title for a batch: the file name, or all names joined for several files
    pub fn lecture_title<S: AsRef<str>>(file_names: &[S]) -> String {
        file_names
            .iter()
            .map(|n| n.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of the text variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSlidesTextRequest {
    pub text: String,
}

impl UploadSlidesTextRequest {
    /// Concatenates `(file name, contents)` pairs, each under a `# name` heading
    pub fn from_documents<N, C>(documents: &[(N, C)]) -> Self
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let text = documents
            .iter()
            .map(|(name, contents)| format!("# {}\n{}", name.as_ref(), contents.as_ref()))
            .collect::<Vec<_>>()
            .join("\n\n");
        Self { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_parse() {
        assert_eq!(UploadEncoding::parse("text"), Some(UploadEncoding::Text));
        assert_eq!(UploadEncoding::parse(" Multipart "), Some(UploadEncoding::Multipart));
        assert_eq!(UploadEncoding::parse("zip"), None);
        assert_eq!(UploadEncoding::default(), UploadEncoding::Multipart);
    }

    #[test]
    fn test_lecture_title() {
        assert_eq!(UploadSlidesForm::lecture_title(&["week1.pdf"]), "week1.pdf");
        assert_eq!(
            UploadSlidesForm::lecture_title(&["week1.pdf", "week2.pdf"]),
            "week1.pdf, week2.pdf"
        );
    }

    #[test]
    fn test_text_request_concatenates_documents() {
        let req = UploadSlidesTextRequest::from_documents(&[
            ("intro.md", "Welcome"),
            ("notes.txt", "Line 1\nLine 2"),
        ]);
        assert_eq!(req.text, "# intro.md\nWelcome\n\n# notes.txt\nLine 1\nLine 2");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "text": req.text.clone() })
        );
    }
}
