use serde::{Deserialize, Serialize};

/// Acknowledgement returned by `POST /upload_slides`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSlidesResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_backend_ack() {
        let resp: UploadSlidesResponse =
            serde_json::from_str(r#"{"status":"received","filename":"week1.pdf"}"#).unwrap();
        assert_eq!(resp.status, "received");
        assert_eq!(resp.filename.as_deref(), Some("week1.pdf"));
    }

    #[test]
    fn test_tolerates_sparse_body() {
        let resp: UploadSlidesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, UploadSlidesResponse::default());
    }
}
