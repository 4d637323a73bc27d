use std::env;

use crate::error::LeiaError;

/// Sample image used by the demos when `ORIGINAL_IMAGE_URL` is not set.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/38771/pexels-photo-38771.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

const CLIENT_ID_VAR: &str = "BACKEND_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "BACKEND_CLIENT_SECRET";
const BUCKET_VAR: &str = "S3_PRESIGNED_URL_BUCKET";
const BUCKET_REGION_VAR: &str = "S3_PRESIGNED_URL_BUCKET_REGION";
const IMAGE_URL_VAR: &str = "ORIGINAL_IMAGE_URL";

const DEFAULT_BUCKET_REGION: &str = "us-east-1";

/// OAuth2 client credentials for LeiaLogin.
///
/// Generated in the API section of the Leia Login console. Both halves are
/// required; there is no default for either.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Reads `BACKEND_CLIENT_ID` and `BACKEND_CLIENT_SECRET` from the
    /// environment.
    ///
    /// # Errors
    ///
    /// `LeiaError::MissingConfig` naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self, LeiaError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LeiaError> {
        let client_id = require(&lookup, CLIENT_ID_VAR)?;
        let client_secret = require(&lookup, CLIENT_SECRET_VAR)?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Bucket settings for the self-managed presigned-URL storage variant.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
}

impl StorageConfig {
    /// Reads `S3_PRESIGNED_URL_BUCKET` and `S3_PRESIGNED_URL_BUCKET_REGION`
    /// from the environment. The region defaults to `us-east-1`; the bucket
    /// has no default.
    pub fn from_env() -> Result<Self, LeiaError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LeiaError> {
        let bucket = require(&lookup, BUCKET_VAR)?;
        let region = lookup(BUCKET_REGION_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET_REGION.to_string());
        Ok(Self { bucket, region })
    }
}

/// Returns `ORIGINAL_IMAGE_URL` from the environment, falling back to the
/// built-in sample image when the variable is unset or empty.
pub fn original_image_url() -> String {
    image_url_from_lookup(|name| env::var(name).ok())
}

fn image_url_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(IMAGE_URL_VAR)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, LeiaError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(LeiaError::MissingConfig { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        move |name| map.get(name).cloned()
    }

    #[test]
    fn credentials_require_both_halves() {
        let map = vars(&[("BACKEND_CLIENT_ID", "client")]);
        let err = Credentials::from_lookup(lookup(&map)).unwrap_err();
        assert!(matches!(
            err,
            LeiaError::MissingConfig {
                name: "BACKEND_CLIENT_SECRET"
            }
        ));
    }

    #[test]
    fn credentials_reject_empty_values() {
        let map = vars(&[("BACKEND_CLIENT_ID", ""), ("BACKEND_CLIENT_SECRET", "s")]);
        let err = Credentials::from_lookup(lookup(&map)).unwrap_err();
        assert!(matches!(
            err,
            LeiaError::MissingConfig {
                name: "BACKEND_CLIENT_ID"
            }
        ));
    }

    #[test]
    fn credentials_read_both_values() {
        let map = vars(&[
            ("BACKEND_CLIENT_ID", "client"),
            ("BACKEND_CLIENT_SECRET", "secret"),
        ]);
        let credentials = Credentials::from_lookup(lookup(&map)).unwrap();
        assert_eq!(credentials.client_id, "client");
        assert_eq!(credentials.client_secret, "secret");
    }

    #[test]
    fn storage_region_defaults_to_us_east_1() {
        let map = vars(&[("S3_PRESIGNED_URL_BUCKET", "my-bucket")]);
        let config = StorageConfig::from_lookup(lookup(&map)).unwrap();
        assert_eq!(config.bucket, "my-bucket");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn storage_bucket_is_required() {
        let map = vars(&[("S3_PRESIGNED_URL_BUCKET_REGION", "eu-west-1")]);
        let err = StorageConfig::from_lookup(lookup(&map)).unwrap_err();
        assert!(matches!(
            err,
            LeiaError::MissingConfig {
                name: "S3_PRESIGNED_URL_BUCKET"
            }
        ));
    }

    #[test]
    fn image_url_falls_back_to_sample() {
        let map = vars(&[]);
        assert_eq!(image_url_from_lookup(lookup(&map)), DEFAULT_IMAGE_URL);

        let map = vars(&[("ORIGINAL_IMAGE_URL", "")]);
        assert_eq!(image_url_from_lookup(lookup(&map)), DEFAULT_IMAGE_URL);

        let map = vars(&[("ORIGINAL_IMAGE_URL", "https://example.com/photo.jpg")]);
        assert_eq!(
            image_url_from_lookup(lookup(&map)),
            "https://example.com/photo.jpg"
        );
    }
}
