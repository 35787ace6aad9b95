//! External image-host client
//!
//! The API never stores image bytes itself: base64 payloads coming from the
//! administration panel are forwarded to an ImgBB-style hosting API and only
//! the resulting public URL is persisted on the document.

mod error;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

pub use error::{ImageHostError, ImageHostResult};

/// Image shown for products created without an upload
pub const DEFAULT_PRODUCT_IMAGE_URI: &str = "https://i.ibb.co/Tkgk8c3/Imagem-Produto-Padrao.png";

/// Clients send images as data URIs; the host wants the bare base64 payload
static DATA_URI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/[a-zA-Z+]+;base64,").expect("Invalid regex"));

/// Successful upload response envelope of the image host
#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Client for the external image-hosting API
pub struct ImageHostClient {
    http_client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl ImageHostClient {
    /// Creates a new image-host client
    ///
    /// # Arguments
    ///
    /// * `upload_url` - Upload endpoint of the hosting API
    /// * `api_key` - API key passed as the `key` query parameter
    #[must_use]
    pub fn new(upload_url: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            upload_url,
            api_key,
        }
    }

    /// Uploads a base64-encoded image and returns its public URL
    ///
    /// A `data:image/...;base64,` prefix is stripped before the upload.
    ///
    /// # Errors
    ///
    /// Returns `ImageHostError::RequestError` when the host is unreachable,
    /// `ImageHostError::UpstreamError` on a 5xx reply,
    /// `ImageHostError::RejectedUpload` on any other non-success reply, and
    /// `ImageHostError::ParseResponseError` when the reply body has no URL
    pub async fn upload_base64(&self, image_base64: &str) -> ImageHostResult<String> {
        let payload = strip_data_uri_prefix(image_base64).to_string();

        let form = reqwest::multipart::Form::new().text("image", payload);

        let response = self
            .http_client
            .post(&self.upload_url)
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ImageHostError::UpstreamError(status.to_string()));
        }
        if !status.is_success() {
            return Err(ImageHostError::RejectedUpload(status.to_string()));
        }

        let envelope: UploadEnvelope = response
            .json()
            .await
            .map_err(|e| ImageHostError::ParseResponseError(e.to_string()))?;

        Ok(envelope.data.url)
    }
}

/// Strips the data-URI prefix from a base64 image payload, if present
fn strip_data_uri_prefix(image_base64: &str) -> &str {
    DATA_URI_PREFIX
        .find(image_base64)
        .map_or(image_base64, |prefix| &image_base64[prefix.end()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_png_prefix() {
        assert_eq!(
            strip_data_uri_prefix("data:image/png;base64,aGVsbG8="),
            "aGVsbG8="
        );
    }

    #[test]
    fn test_strip_svg_plus_xml_style_prefix() {
        // The charset group accepts a `+` as in image/svg+xml-ish types
        assert_eq!(
            strip_data_uri_prefix("data:image/svg+;base64,aGVsbG8="),
            "aGVsbG8="
        );
    }

    #[test]
    fn test_bare_payload_is_untouched() {
        assert_eq!(strip_data_uri_prefix("aGVsbG8="), "aGVsbG8=");
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        let payload = "aGVsbG8=data:image/png;base64,";
        assert_eq!(strip_data_uri_prefix(payload), payload);
    }

    #[test]
    fn test_upload_envelope_parses_host_response() {
        let body = r#"{"data":{"url":"https://i.ibb.co/abc/img.png","display_url":"x"},"success":true,"status":200}"#;
        let envelope: UploadEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.url, "https://i.ibb.co/abc/img.png");
    }
}
