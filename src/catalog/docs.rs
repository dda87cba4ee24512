//! Best-effort remote banner/footer markdown.
//!
//! These texts are purely cosmetic. Every failure falls back to the embedded
//! defaults; callers never see an error from here.

/// Shown above the preview when the remote banner cannot be fetched
pub const FALLBACK_BANNER: &str =
    "## Model Downloader\nFetch catalog models straight into your WebUI folders.";

/// Shown below the preview when the remote footer cannot be fetched
pub const FALLBACK_FOOTER: &str =
    "Report problems or request model types through the project issue tracker.";

/// Fetch banner and footer markdown from `<api_base>/docs/`
pub async fn fetch_docs(client: &reqwest::Client, api_base: &str) -> (String, String) {
    let base = api_base.trim_end_matches('/');

    let banner = fetch_doc(client, base, "banner.md")
        .await
        .unwrap_or_else(|| FALLBACK_BANNER.to_string());
    let footer = fetch_doc(client, base, "footer.md")
        .await
        .unwrap_or_else(|| FALLBACK_FOOTER.to_string());

    (banner, footer)
}

async fn fetch_doc(client: &reqwest::Client, base: &str, name: &str) -> Option<String> {
    let url = format!("{base}/docs/{name}");

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Doc request for {name} failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("Doc request for {name} returned {}", response.status());
        return None;
    }

    response.text().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_api_falls_back() {
        let client = reqwest::Client::new();
        let (banner, footer) = fetch_docs(&client, "http://127.0.0.1:9").await;

        assert_eq!(banner, FALLBACK_BANNER);
        assert_eq!(footer, FALLBACK_FOOTER);
    }
}
