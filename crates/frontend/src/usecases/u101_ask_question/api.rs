use contracts::usecases::u101_ask_question::{AskRequest, AskResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::read_json;
use crate::shared::error::ApiError;

/// Send a question to the backend and wait for the answer
pub async fn ask(url: &str, request: &AskRequest) -> Result<AskResponse, ApiError> {
    let response = Request::post(url)
        .json(request)
        .map_err(ApiError::encode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    read_json::<AskResponse>(response).await
}
