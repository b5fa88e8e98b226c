use reqwest::multipart::{Form, Part};
use std::{future::Future, time::Duration};

use crate::{error::ClassifyError, file::SelectedFile, response::ClassificationResponse};

/// Path of the classification endpoint on the server.
pub const DEFAULT_ENDPOINT: &str = "/upload-image/";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Multipart field the image is sent under.
pub const FILE_FIELD: &str = "file";

/// Anything able to classify a single uploaded image.
///
/// The upload controller only talks to this trait, so tests and other
/// transports can stand in for the HTTP endpoint.
pub trait Classifier {
    /// Submits `file` and waits for the classification result.
    fn classify(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = Result<ClassificationResponse, ClassifyError>> + Send;
}

/// Where and how to reach the classification endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Endpoint path appended to `base_url`.
    pub endpoint: String,
    /// Request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Plain-HTTP config for `host:port` with the default endpoint.
    pub fn from_host(host: &str, port: u16) -> Self {
        Self {
            base_url: format!("http://{host}:{port}"),
            ..Self::default()
        }
    }

    /// Full URL the upload is posted to.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

/// Classifier backed by the remote `/upload-image/` endpoint.
#[derive(Clone, Debug)]
pub struct HttpClassifier {
    client: reqwest::Client,
    url: String,
}

impl HttpClassifier {
    /// Builds the HTTP client, applying the configured timeout if any.
    pub fn new(config: ClientConfig) -> Result<Self, ClassifyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ClassifyError::Transport)?,
            url: config.upload_url(),
        })
    }

    /// Full URL uploads are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, file: &SelectedFile) -> Result<ClassificationResponse, ClassifyError> {
        log::info!("Uploading file: {}", file.name);

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(ClassifyError::Transport)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(ClassifyError::Transport)?;

        let status = response.status();
        log::debug!("Response status: {status}");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log::error!("Server error response: {text}");
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let result: ClassificationResponse = serde_json::from_slice(&body)?;

        match &result.plant_info {
            Some(info) => log::debug!("Plant info from database: {info:?}"),
            None => log::debug!("No plant info found for {}", result.prediction.class_name),
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.upload_url(), "http://localhost:8000/upload-image/");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_upload_url_joins_slashes() {
        let config = ClientConfig {
            base_url: "http://plants.local/".to_string(),
            endpoint: "upload-image/".to_string(),
            timeout: None,
        };
        assert_eq!(config.upload_url(), "http://plants.local/upload-image/");

        let config = ClientConfig::from_host("127.0.0.1", 3000);
        assert_eq!(config.upload_url(), "http://127.0.0.1:3000/upload-image/");
    }

    #[test]
    fn test_client_uses_config_url() -> Result<(), ClassifyError> {
        let config = ClientConfig {
            timeout: Some(Duration::from_secs(5)),
            ..ClientConfig::from_host("example.org", 80)
        };
        let classifier = HttpClassifier::new(config)?;
        assert_eq!(classifier.url(), "http://example.org:80/upload-image/");
        Ok(())
    }
}
