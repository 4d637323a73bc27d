use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials as AwsCredentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::config::StorageConfig;
use crate::error::LeiaError;

/// Bucket key under which the demos store the generated disparity map.
pub const DISPARITY_KEY: &str = "public/leiapixcloud/disparity.jpg";
/// Bucket key under which the demos store the generated animation.
pub const ANIMATION_KEY: &str = "public/leiapixcloud/animation.mp4";

/// Self-managed presigned URLs stay valid for a full day, long enough to
/// cover the generation calls and a later manual download.
const URL_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

/// Presigns PUT and GET URLs against a caller-owned S3 bucket.
///
/// This is the storage half of the "custom storage" flow: the media API never
/// sees the bucket credentials, only time-boxed signed URLs for individual
/// keys. Credentials are resolved once at construction and injected into the
/// S3 client, never read from ambient global state afterwards.
#[derive(Clone)]
pub struct ArtifactStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl ArtifactStore {
    /// Builds a store whose credentials come from the SDK's default provider
    /// chain: environment variables, then the shared AWS config files, then
    /// an instance role.
    pub async fn from_env(config: &StorageConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Builds a store with explicitly provided credentials.
    ///
    /// Useful when the ambient provider chain is unavailable or undesirable,
    /// and for tests that sign with fixed keys.
    pub async fn with_credentials(credentials: AwsCredentials, config: &StorageConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket: config.bucket.clone(),
        }
    }

    /// The bucket all URLs are signed against.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Presigns an uploadable (HTTP PUT) URL for `key`, valid for 24 hours.
    pub async fn presign_put(&self, key: &str) -> Result<String, LeiaError> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config()?)
            .await
            .map_err(|e| LeiaError::Presign(e.to_string()))?;

        Ok(request.uri().to_string())
    }

    /// Presigns a downloadable (HTTP GET) URL for `key`, valid for 24 hours.
    pub async fn presign_get(&self, key: &str) -> Result<String, LeiaError> {
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config()?)
            .await
            .map_err(|e| LeiaError::Presign(e.to_string()))?;

        Ok(request.uri().to_string())
    }
}

fn presigning_config() -> Result<PresigningConfig, LeiaError> {
    PresigningConfig::expires_in(URL_VALIDITY).map_err(|e| LeiaError::Presign(e.to_string()))
}
