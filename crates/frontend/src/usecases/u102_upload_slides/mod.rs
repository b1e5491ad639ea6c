//! Professor upload: send slides and notes to the ingestion backend
//!
//! Structure:
//! - api.rs: `POST /upload_slides` client (multipart or text body)
//! - state.rs: selected files and send status (no browser dependencies)
//! - view.rs: `UploadSlidesPage` component

pub mod api;
pub mod state;
pub mod view;

pub use view::UploadSlidesPage;
