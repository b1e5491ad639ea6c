use thiserror::Error;

/// Failure of a backend call. Screens only show a fixed fallback text; the detail goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to build request: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to read file {name}: {reason}")]
    ReadFile { name: String, reason: String },
}

impl ApiError {
    pub fn encode(e: impl std::fmt::Display) -> Self {
        ApiError::Encode(e.to_string())
    }

    pub fn network(e: impl std::fmt::Display) -> Self {
        ApiError::Network(e.to_string())
    }

    pub fn decode(e: impl std::fmt::Display) -> Self {
        ApiError::Decode(e.to_string())
    }

    /// For errors surfaced as raw `JsValue`s by `web_sys`
    pub fn js(e: wasm_bindgen::JsValue) -> Self {
        ApiError::Encode(format!("{e:?}"))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Http { status: 502 }.to_string(), "HTTP error: 502");
        assert_eq!(
            ApiError::ReadFile {
                name: "a.pdf".into(),
                reason: "not utf-8".into()
            }
            .to_string(),
            "failed to read file a.pdf: not utf-8"
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::Http { status: 404 }.status(), Some(404));
        assert_eq!(ApiError::network("offline").status(), None);
    }
}
