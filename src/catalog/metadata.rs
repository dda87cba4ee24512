use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Structured model metadata for one catalog entry.
///
/// Produced once per successful catalog query and consumed within the same
/// preview/download cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
    pub name: String,
    /// Raw category string as the catalog reports it ("Checkpoint", "LORA", ...)
    pub category: String,
    pub trained_words: Vec<String>,
    pub creator: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub description: String,
    pub image_url: Option<String>,
    pub file_name: String,
    pub download_url: String,
}

impl ModelMetadata {
    /// Whether the catalog published a downloadable file for this model
    #[must_use]
    pub fn downloadable(&self) -> bool {
        !self.download_url.is_empty()
    }
}

/// Wire shape of `GET <api-base>/civitai/models/<id>`.
///
/// Any missing required field is a deserialization failure, which the client
/// surfaces as a malformed-response error.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiModel {
    name: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: String,
    creator: ApiCreator,
    version: ApiVersion,
}

#[derive(Debug, Deserialize)]
struct ApiCreator {
    username: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiVersion {
    #[serde(default)]
    trained_words: Vec<String>,
    updated_at: DateTime<Utc>,
    image: ApiImage,
    file: ApiFile,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiFile {
    name: String,
    download_url: String,
}

impl From<ApiModel> for ModelMetadata {
    fn from(api: ApiModel) -> Self {
        Self {
            name: api.name,
            category: api.category,
            trained_words: api.version.trained_words,
            creator: api.creator.username,
            tags: api.tags,
            updated_at: api.version.updated_at,
            description: api.description,
            image_url: api.version.image.url.filter(|u| !u.is_empty()),
            file_name: api.version.file.name,
            download_url: api.version.file.download_url,
        }
    }
}
