use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_upload_slides::{
    UploadEncoding, UploadSlides, UploadSlidesForm, UploadSlidesResponse, UploadSlidesTextRequest,
};
use gloo_net::http::Request;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData};

use crate::shared::api_utils::read_json;
use crate::shared::config::ClientConfig;
use crate::shared::error::ApiError;

/// Upload a batch of files using the configured encoding
pub async fn upload_slides(
    config: &ClientConfig,
    files: &[File],
) -> Result<UploadSlidesResponse, ApiError> {
    let url = config.url(UploadSlides::endpoint());
    log::info!(
        "{}: sending {} file(s) as {}",
        UploadSlides::full_name(),
        files.len(),
        config.upload_encoding.as_str()
    );

    match config.upload_encoding {
        UploadEncoding::Multipart => upload_multipart(&url, &config.course_id, files).await,
        UploadEncoding::Text => upload_text(&url, files).await,
    }
}

/// `multipart/form-data` with one `file` part per file
pub async fn upload_multipart(
    url: &str,
    course_id: &str,
    files: &[File],
) -> Result<UploadSlidesResponse, ApiError> {
    let form = FormData::new().map_err(ApiError::js)?;
    let names: Vec<String> = files.iter().map(|f| f.name()).collect();

    for file in files {
        form.append_with_blob_and_filename(UploadSlidesForm::FILE, file, &file.name())
            .map_err(ApiError::js)?;
    }
    form.append_with_str(UploadSlidesForm::COURSE_ID, course_id)
        .map_err(ApiError::js)?;
    form.append_with_str(
        UploadSlidesForm::LECTURE_TITLE,
        &UploadSlidesForm::lecture_title(&names),
    )
    .map_err(ApiError::js)?;

    let response = Request::post(url)
        .body(form)
        .map_err(ApiError::encode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    read_json::<UploadSlidesResponse>(response).await
}

/// JSON `{ "text": ... }` with every file read as text
pub async fn upload_text(url: &str, files: &[File]) -> Result<UploadSlidesResponse, ApiError> {
    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        documents.push((file.name(), read_text(file).await?));
    }
    let request = UploadSlidesTextRequest::from_documents(&documents);

    let response = Request::post(url)
        .json(&request)
        .map_err(ApiError::encode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    read_json::<UploadSlidesResponse>(response).await
}

async fn read_text(file: &File) -> Result<String, ApiError> {
    let read_error = |reason: String| ApiError::ReadFile {
        name: file.name(),
        reason,
    };

    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| read_error(format!("{e:?}")))?;

    value
        .as_string()
        .ok_or_else(|| read_error("contents are not text".to_string()))
}
