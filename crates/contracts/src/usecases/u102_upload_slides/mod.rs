pub mod request;
pub mod response;

pub use request::{UploadEncoding, UploadSlidesForm, UploadSlidesTextRequest};
pub use response::UploadSlidesResponse;

use crate::usecases::common::UseCaseMetadata;

/// Course id sent with uploads unless configured otherwise
pub const DEFAULT_COURSE_ID: &str = "CSE368";

pub struct UploadSlides;

impl UseCaseMetadata for UploadSlides {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "upload_slides"
    }

    fn display_name() -> &'static str {
        "Professors"
    }

    fn endpoint() -> &'static str {
        "/upload_slides"
    }

    fn description() -> &'static str {
        "Upload lecture slides and notes for the assistant to use"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(UploadSlides::full_name(), "u102_upload_slides");
        assert_eq!(UploadSlides::endpoint(), "/upload_slides");
        assert!(!UploadSlides::description().is_empty());
    }
}
