//! Helpers shared by the backend API clients

use super::error::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Turns a non-2xx response into `ApiError::Http`
pub fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    Ok(response)
}

/// Checks the status and decodes the JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)?
        .json::<T>()
        .await
        .map_err(ApiError::decode)
}
