use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::api::types::{AnalysisResult, CvFile, ErrorBody, StatusResponse};
use crate::config::{Config, UploadConfig};

/// HTTP client for the analysis service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct AnalyzerClient {
    client: Client,
    status_url: String,
    upload_url: String,
    upload: UploadConfig,
    request_timeout: Duration,
}

impl AnalyzerClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.server.connect_timeout())
            .build()
            .map_err(|source| ApiError::Transport { source })?;

        Ok(Self {
            client,
            status_url: config.server.status_url(),
            upload_url: config.server.upload_url(),
            upload: config.upload.clone(),
            request_timeout: config.server.request_timeout(),
        })
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Ask the service for its status message.
    pub async fn probe_status(&self) -> Result<String, ApiError> {
        self.with_timeout(async {
            let response = self
                .client
                .get(&self.status_url)
                .send()
                .await
                .map_err(|source| ApiError::Transport { source })?;

            let status = response.status();
            let body = read_body(response).await?;
            if !status.is_success() {
                return Err(server_error(status.as_u16(), &body));
            }
            let parsed: StatusResponse =
                serde_json::from_slice(&body).map_err(|source| ApiError::Decode { source })?;
            Ok(parsed.message)
        })
        .await
    }

    /// Send the CV and job description for analysis.
    pub async fn upload(
        &self,
        file: &CvFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime())
            .map_err(|source| ApiError::Transport { source })?;
        let form = Form::new()
            .part(self.upload.file_field.clone(), part)
            .text(
                self.upload.description_field.clone(),
                job_description.to_string(),
            );

        tracing::debug!(
            url = %self.upload_url,
            file = %file.name(),
            bytes = file.len(),
            description_chars = job_description.chars().count(),
            "Uploading CV"
        );

        self.with_timeout(async {
            let response = self
                .client
                .post(&self.upload_url)
                .multipart(form)
                .send()
                .await
                .map_err(|source| ApiError::Transport { source })?;

            let status = response.status();
            let body = read_body(response).await?;
            if !status.is_success() {
                return Err(server_error(status.as_u16(), &body));
            }
            serde_json::from_slice::<AnalysisResult>(&body)
                .map_err(|source| ApiError::Decode { source })
        })
        .await
    }

    async fn with_timeout<T>(
        &self,
        request: impl std::future::Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match timeout(self.request_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, ApiError> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|source| ApiError::Transport { source })
}

/// Map a non-success response to an error.
///
/// A JSON body yields `Server` with its non-blank `error` text, if any.
/// Anything that is not JSON means no usable response arrived.
fn server_error(status: u16, body: &[u8]) -> ApiError {
    let value = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(source) => return ApiError::UnreadableFailure { status, source },
    };
    let message = serde_json::from_value::<ErrorBody>(value)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty());
    ApiError::Server { status, message }
}
