//! HTTP client helpers (REST).

use anyhow::anyhow;
use gloo_net::http::Request;
use parlor_api_models::{DeleteImageResponse, ErrorResponse};

use crate::logic::delete_image_path;
use crate::services::auth_headers::get_auth_headers;

/// Client for the Parlor API, authenticated with the stored access token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client targeting the API at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Delete the image stored at `image_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the deletion;
    /// the API's `error` message is carried in the returned error.
    pub async fn delete_image(&self, image_url: &str) -> anyhow::Result<DeleteImageResponse> {
        let mut req = Request::delete(&format!(
            "{}{}",
            self.base_url,
            delete_image_path(image_url)
        ));
        if let Some(headers) = get_auth_headers() {
            for (name, value) in headers.pairs() {
                req = req.header(name, value);
            }
        }

        let response = req.send().await?;
        if response.ok() {
            return Ok(response.json::<DeleteImageResponse>().await?);
        }
        let status = response.status();
        let body = response.json::<ErrorResponse>().await?;
        Err(anyhow!("image deletion failed ({status}): {}", body.error))
    }
}
