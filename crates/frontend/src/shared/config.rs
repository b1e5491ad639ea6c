//! Client configuration
//!
//! Resolved once at startup and provided through Leptos context. Each field
//! can be overridden from `localStorage`, which is handy when the backend
//! runs somewhere other than the page host.

use contracts::usecases::u102_upload_slides::{UploadEncoding, DEFAULT_COURSE_ID};
use leptos::prelude::*;

pub const API_BASE_KEY: &str = "ta_api_base";
pub const COURSE_ID_KEY: &str = "ta_course_id";
pub const UPLOAD_ENCODING_KEY: &str = "ta_upload_encoding";

/// Port the backend listens on when the API base is derived from the page location
pub const DEFAULT_API_PORT: u16 = 8000;
const FALLBACK_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub course_id: String,
    pub upload_encoding: UploadEncoding,
}

/// Page location parts used to derive the default API base
#[derive(Debug, Clone)]
pub struct PageLocation {
    pub protocol: String,
    pub hostname: String,
}

impl ClientConfig {
    /// Reads overrides from `localStorage`, the build-time `TA_API_BASE`, and the page location
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let stored = |key: &str| {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
        };
        let config = Self::resolve(stored, option_env!("TA_API_BASE"), page_location());
        log::info!(
            "client config: api_base={} course_id={} upload_encoding={}",
            config.api_base,
            config.course_id,
            config.upload_encoding.as_str()
        );
        config
    }

    pub fn resolve(
        stored: impl Fn(&str) -> Option<String>,
        build_time_api_base: Option<&str>,
        location: Option<PageLocation>,
    ) -> Self {
        let api_base = non_blank(stored(API_BASE_KEY))
            .or_else(|| non_blank(build_time_api_base.map(str::to_string)))
            .unwrap_or_else(|| match location {
                Some(loc) if !loc.hostname.is_empty() => {
                    format!("{}//{}:{}", loc.protocol, loc.hostname, DEFAULT_API_PORT)
                }
                _ => FALLBACK_API_BASE.to_string(),
            });

        let course_id =
            non_blank(stored(COURSE_ID_KEY)).unwrap_or_else(|| DEFAULT_COURSE_ID.to_string());

        let upload_encoding = match stored(UPLOAD_ENCODING_KEY) {
            Some(raw) => UploadEncoding::parse(&raw).unwrap_or_else(|| {
                log::warn!("unknown upload encoding {:?}, using default", raw);
                UploadEncoding::default()
            }),
            None => UploadEncoding::default(),
        };

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            course_id,
            upload_encoding,
        }
    }

    /// Full URL of a backend path such as "/ask"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(|_| None, None, None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn page_location() -> Option<PageLocation> {
    let location = web_sys::window()?.location();
    Some(PageLocation {
        protocol: location.protocol().unwrap_or_else(|_| "http:".to_string()),
        hostname: location.hostname().ok()?,
    })
}

pub fn provide_client_config() {
    provide_context(ClientConfig::load());
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn location(host: &str) -> Option<PageLocation> {
        Some(PageLocation {
            protocol: "https:".into(),
            hostname: host.into(),
        })
    }

    #[test]
    fn test_defaults_follow_page_host() {
        let cfg = ClientConfig::resolve(|_| None, None, location("ta.example.edu"));
        assert_eq!(cfg.api_base, "https://ta.example.edu:8000");
        assert_eq!(cfg.course_id, "CSE368");
        assert_eq!(cfg.upload_encoding, UploadEncoding::Multipart);
    }

    #[test]
    fn test_fallback_without_window() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_base, "http://localhost:8000");
        assert_eq!(cfg.url("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_storage_overrides_win() {
        let stored: HashMap<&str, &str> = HashMap::from([
            (API_BASE_KEY, "http://10.0.0.5:9000/"),
            (COURSE_ID_KEY, "CSE250"),
            (UPLOAD_ENCODING_KEY, "text"),
        ]);
        let cfg = ClientConfig::resolve(
            |k| stored.get(k).map(|v| v.to_string()),
            Some("http://build.example"),
            location("ta.example.edu"),
        );
        assert_eq!(cfg.api_base, "http://10.0.0.5:9000");
        assert_eq!(cfg.course_id, "CSE250");
        assert_eq!(cfg.upload_encoding, UploadEncoding::Text);
    }

    #[test]
    fn test_build_time_base_beats_location() {
        let cfg = ClientConfig::resolve(
            |k| (k == API_BASE_KEY).then(|| "   ".to_string()),
            Some("http://build.example"),
            location("ta.example.edu"),
        );
        assert_eq!(cfg.api_base, "http://build.example");
    }

    #[test]
    fn test_unknown_encoding_falls_back() {
        let cfg = ClientConfig::resolve(
            |k| (k == UPLOAD_ENCODING_KEY).then(|| "zip".to_string()),
            None,
            None,
        );
        assert_eq!(cfg.upload_encoding, UploadEncoding::Multipart);
    }
}
