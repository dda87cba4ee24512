use crate::catalog::metadata::{ApiModel, ModelMetadata};
use crate::error::{FetchError, Result};

/// Model page links must start with this; everything after it is the
/// identifier suffix forwarded to the API.
pub const CATALOG_PAGE_PREFIX: &str = "https://civitai.com/models/";

/// Client for the catalog proxy API
pub struct CatalogClient {
    client: reqwest::Client,
    api_base: String,
}

impl CatalogClient {
    /// Create a client against the given API base URL
    #[must_use]
    pub fn new(api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Underlying HTTP client, shared with best-effort doc fetches
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Extract the model identifier suffix from a catalog page URL.
    ///
    /// Returns `None` for anything that is not a catalog model page; callers
    /// must not issue any request in that case.
    #[must_use]
    pub fn model_id(page_url: &str) -> Option<&str> {
        page_url
            .strip_prefix(CATALOG_PAGE_PREFIX)
            .filter(|suffix| !suffix.is_empty())
    }

    /// Fetch structured metadata for a catalog model page URL
    pub async fn fetch_detail(&self, page_url: &str) -> Result<ModelMetadata> {
        let id = Self::model_id(page_url)
            .ok_or_else(|| FetchError::InvalidLink(page_url.to_string()))?;

        let req_url = format!("{}/civitai/models/{id}", self.api_base);
        tracing::debug!("Requesting model detail: {req_url}");

        let response = self
            .client
            .get(&req_url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::ServiceUnavailable);
        }
        if status.is_client_error() {
            return Err(FetchError::InvalidLink(page_url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::RequestFailed(body));
        }

        let api: ApiModel = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(ModelMetadata::from(api))
    }

    /// Fetch the preview image bytes, best-effort.
    ///
    /// The image is only for display and the `.jpeg` sidecar; any failure
    /// degrades to `None` instead of aborting the preview.
    pub async fn fetch_preview_image(&self, url: &str) -> Option<Vec<u8>> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Preview image request failed: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Preview image fetch returned {}", response.status());
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::warn!("Preview image read failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_valid_page() {
        assert_eq!(
            CatalogClient::model_id("https://civitai.com/models/28687/pen-sketch-style"),
            Some("28687/pen-sketch-style")
        );
        assert_eq!(
            CatalogClient::model_id("https://civitai.com/models/123"),
            Some("123")
        );
    }

    #[test]
    fn test_model_id_rejects_other_hosts() {
        assert_eq!(CatalogClient::model_id("https://othersite.com/models/123"), None);
        assert_eq!(CatalogClient::model_id("http://civitai.com/models/123"), None);
    }

    #[test]
    fn test_model_id_rejects_non_model_pages() {
        assert_eq!(CatalogClient::model_id("https://civitai.com/images/5"), None);
        assert_eq!(CatalogClient::model_id("https://civitai.com/models/"), None);
        assert_eq!(CatalogClient::model_id(""), None);
    }

    #[tokio::test]
    async fn test_fetch_detail_invalid_link_no_request() {
        // An unroutable api_base proves no request is attempted: an invalid
        // link must fail before any network I/O.
        let client = CatalogClient::new("http://127.0.0.1:9");
        let result = client
            .fetch_detail("https://othersite.com/models/123")
            .await;

        assert!(matches!(result, Err(FetchError::InvalidLink(_))));
    }

    #[test]
    fn test_api_base_trailing_slash_normalized() {
        let client = CatalogClient::new("https://api.example.com/");
        assert_eq!(client.api_base, "https://api.example.com");
    }
}
