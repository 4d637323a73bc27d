use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::config::Credentials;
use crate::error::LeiaError;
use crate::types::{
    AnimationRequest, DisparityRequest, GenerationResult, TokenRequest, TokenResponse,
    UploadUrlResponse,
};

const DEFAULT_API_URL: &str = "https://api.leiapix.com/";
const DEFAULT_TOKEN_URL: &str =
    "https://auth.leialoft.com/auth/realms/leialoft/protocol/openid-connect/token";

/// Disparity and animation jobs run synchronously on the provider side, so
/// every call is bounded by the same generous timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// The main client for interacting with the LeiaPix Media Cloud API.
///
/// It holds the shared `reqwest::Client`, the base URL for all API requests,
/// and the bearer token acquired at login. It is designed to be cloneable and
/// safe to share across threads, though one client per script run is the
/// expected usage.
#[derive(Clone, Debug)]
pub struct LeiaClient {
    client: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl LeiaClient {
    /// Authenticates against LeiaLogin with OAuth2 client credentials and
    /// returns a client ready to call the media API.
    ///
    /// This performs one POST to the OpenID token endpoint with a
    /// form-encoded `grant_type=client_credentials` body. The returned
    /// bearer token is installed as a default `Authorization` header for
    /// all subsequent requests; it is never refreshed.
    ///
    /// # Errors
    ///
    /// - `LeiaError::Provider` if the token endpoint answers non-2xx.
    /// - `LeiaError::Transport` on a network fault or timeout.
    pub async fn login(credentials: &Credentials) -> Result<Self, LeiaError> {
        Self::login_with_urls(credentials, DEFAULT_TOKEN_URL, DEFAULT_API_URL).await
    }

    /// Authenticates against a custom token endpoint and API base URL.
    ///
    /// This is useful for testing or for connecting to a different API
    /// deployment.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The OAuth2 client id and secret.
    /// * `token_url` - The OpenID token endpoint (e.g., a mock server).
    /// * `base_url` - The base URL for the media API.
    pub async fn login_with_urls(
        credentials: &Credentials,
        token_url: &str,
        base_url: &str,
    ) -> Result<Self, LeiaError> {
        let login_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        tracing::debug!(token_url, "acquiring access token");

        let request_body = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
        };

        let response = login_client
            .post(token_url)
            .form(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let token: TokenResponse = response.json().await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token.access_token).parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url,
            access_token: token.access_token,
        })
    }

    /// The bearer token acquired at login.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Submits a disparity-map generation job.
    ///
    /// The call blocks until the disparity map has been produced (or the
    /// request times out). When the request carries a `result_presigned_url`,
    /// the artifact is PUT there and the returned [`GenerationResult`] is
    /// typically empty; otherwise the provider stores the artifact itself and
    /// returns a short-lived download URL.
    ///
    /// # Errors
    ///
    /// `LeiaError::Provider` with the response status and body on any
    /// non-2xx answer.
    pub async fn generate_disparity(
        &self,
        request: &DisparityRequest<'_>,
    ) -> Result<GenerationResult, LeiaError> {
        let url = self.base_url.join("api/v1/disparity")?;
        tracing::debug!(correlation_id = request.correlation_id, "requesting disparity map");

        let response = self.client.post(url).json(request).send().await?;
        generation_result(response).await
    }

    /// Submits an animation generation job.
    ///
    /// Semantics mirror [`generate_disparity`](Self::generate_disparity):
    /// the call blocks until the animation is ready, and the result either
    /// lands at the request's `result_presigned_url` or comes back as a
    /// short-lived download URL. When `input_disparity_url` is omitted the
    /// provider generates a fresh disparity map server side.
    pub async fn generate_animation(
        &self,
        request: &AnimationRequest<'_>,
    ) -> Result<GenerationResult, LeiaError> {
        let url = self.base_url.join("api/v1/animation")?;
        tracing::debug!(correlation_id = request.correlation_id, "requesting animation");

        let response = self.client.post(url).json(request).send().await?;
        generation_result(response).await
    }

    /// Requests an uploadable URL from the provider's temporary storage.
    ///
    /// The returned URL accepts one HTTP PUT of the named file and can be
    /// passed as the `result_presigned_url` of a generation request. Its
    /// validity window is provider-defined and short.
    ///
    /// # Arguments
    ///
    /// * `correlation_id` - The id of the job the upload belongs to.
    /// * `file_name` - Target file name, e.g. `disparity.jpg`.
    /// * `media_type` - MIME type of the file, e.g. `image/jpeg`.
    pub async fn get_upload_url(
        &self,
        correlation_id: &str,
        file_name: &str,
        media_type: &str,
    ) -> Result<String, LeiaError> {
        let url = self.base_url.join("api/v1/get-upload-url")?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("correlationId", correlation_id),
                ("fileName", file_name),
                ("mediaType", media_type),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            let upload: UploadUrlResponse = response.json().await?;
            Ok(upload.url)
        } else {
            Err(provider_error(response).await)
        }
    }

    /// Downloads a generated artifact from its presigned URL.
    ///
    /// Result URLs returned by the provider expire quickly, so artifacts
    /// should be fetched promptly after generation. The file name is
    /// inferred from the URL path and the content is written under
    /// `dest_dir`.
    ///
    /// # Returns
    ///
    /// The path of the newly created file.
    ///
    /// # Errors
    ///
    /// This function can return an error if the download fails, if the
    /// destination directory or file cannot be created, or if there's an
    /// issue writing the file to disk.
    pub async fn download_artifact<P: AsRef<Path>>(
        &self,
        artifact_url: &str,
        dest_dir: P,
    ) -> Result<PathBuf, LeiaError> {
        let parsed_url = Url::parse(artifact_url)?;
        let file_name = parsed_url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .unwrap_or("artifact.bin");

        // Presigned URLs embed their own credentials; the bearer header must
        // not be sent alongside them.
        let download_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = download_client.get(artifact_url).send().await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        fs::create_dir_all(dest_dir.as_ref()).await?;

        let file_path = dest_dir.as_ref().join(file_name);
        let mut file = fs::File::create(&file_path).await?;
        let content = response.bytes().await?;
        file.write_all(&content).await?;

        Ok(file_path)
    }
}

/// Maps a 2xx generation response to a [`GenerationResult`], tolerating the
/// empty body the API sends when the artifact was uploaded to a
/// caller-provided URL.
async fn generation_result(response: reqwest::Response) -> Result<GenerationResult, LeiaError> {
    if response.status().is_success() {
        let body = response.text().await?;
        if body.is_empty() {
            Ok(GenerationResult::default())
        } else {
            Ok(serde_json::from_str(&body)?)
        }
    } else {
        Err(provider_error(response).await)
    }
}

async fn provider_error(response: reqwest::Response) -> LeiaError {
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or_default();
    LeiaError::Provider { status, body }
}
