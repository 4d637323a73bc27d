use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh correlation id for one artifact-generation request.
///
/// The id might equally be an identifier your own system already tracks for
/// the image; the provider only uses it to tag the job, so a random UUIDv4
/// is enough.
pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// A private struct for serializing the client-credentials token request body.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub(crate) client_id: &'a str,
    pub(crate) client_secret: &'a str,
    pub(crate) grant_type: &'a str,
}

/// (Internal) Holds the bearer token issued by LeiaLogin.
///
/// The token endpoint also returns expiry and scope fields, but a single
/// script run never outlives the token, so only `access_token` is kept.
#[derive(Deserialize, Debug)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
}

/// A request to generate a disparity map from a 2D image.
///
/// When `result_presigned_url` is set, the API PUTs the disparity map there
/// and the response body may be empty. When it is `None`, the API stores the
/// result itself and returns a short-lived download URL in the response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DisparityRequest<'a> {
    /// Client-generated id tagging this job for provider-side tracking.
    pub correlation_id: &'a str,
    /// Publicly reachable URL of the source image.
    pub input_image_url: &'a str,
    /// Uploadable URL (HTTP PUT) where the API writes the disparity map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_presigned_url: Option<&'a str>,
}

/// A request to generate a short animation from a 2D image.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRequest<'a> {
    /// Client-generated id tagging this job for provider-side tracking.
    pub correlation_id: &'a str,
    /// Publicly reachable URL of the source image.
    pub input_image_url: &'a str,
    /// Downloadable URL (HTTP GET) of a previously generated disparity map.
    /// When omitted, the API generates a fresh disparity map server side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_disparity_url: Option<&'a str>,
    /// Uploadable URL (HTTP PUT) where the API writes the animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_presigned_url: Option<&'a str>,
    /// Length of the animation in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_length: Option<u32>,
}

/// The response from a disparity or animation call.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Short-lived downloadable URL of the generated artifact. Present when
    /// the API managed storage itself; absent when the result was uploaded
    /// to a caller-provided URL. Expires quickly, so download promptly.
    #[serde(default)]
    pub result_presigned_url: Option<String>,
}

/// (Internal) The response from the `get-upload-url` storage endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct UploadUrlResponse {
    pub(crate) url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_distinct_uuidv4() {
        let first = new_correlation_id();
        let second = new_correlation_id();
        assert_ne!(first, second);

        for id in [&first, &second] {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }
}
