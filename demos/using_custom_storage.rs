//! End-to-end disparity + animation generation using a caller-owned S3
//! bucket for the results.
//!
//! The media API never receives bucket credentials: it is handed a presigned
//! PUT URL per artifact and uploads the result there. A presigned GET URL
//! for the same key is printed afterwards (and feeds the disparity map into
//! the animation call).
//!
//! To run this demo you must set `BACKEND_CLIENT_ID`, `BACKEND_CLIENT_SECRET`,
//! and `S3_PRESIGNED_URL_BUCKET` (region via `S3_PRESIGNED_URL_BUCKET_REGION`,
//! default `us-east-1`), and have AWS credentials resolvable from the usual
//! provider chain.
//!
//! Usage:
//! `cargo run --example using_custom_storage`

use leiapix::{
    new_correlation_id, original_image_url, AnimationRequest, ArtifactStore, Credentials,
    DisparityRequest, LeiaClient, LeiaError, StorageConfig, ANIMATION_KEY, DISPARITY_KEY,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!(
                "Error. In order to authenticate against the Leia Media Cloud API, \
                 you need to provide BACKEND_CLIENT_ID and BACKEND_CLIENT_SECRET \
                 env vars ({e})"
            );
            std::process::exit(1);
        }
    };

    let storage_config = match StorageConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Error. In order to presign result URLs, you need to provide \
                 S3_PRESIGNED_URL_BUCKET and S3_PRESIGNED_URL_BUCKET_REGION \
                 env vars ({e})"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&credentials, &storage_config).await {
        eprintln!("Error. Unhandled exception: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    credentials: &Credentials,
    storage_config: &StorageConfig,
) -> Result<(), LeiaError> {
    // AWS credentials are resolved once here, from the default provider
    // chain (env vars, shared config, instance role).
    let store = ArtifactStore::from_env(storage_config).await;

    println!("Acquiring access token from LeiaLogin...");
    let client = LeiaClient::login(credentials).await?;
    println!("\nLeiaLogin AccessToken acquired: {}", client.access_token());

    let image_url = original_image_url();

    // The correlation id might be an id your own system already uses for
    // this image; a fresh UUIDv4 per request works just as well.
    let correlation_id = new_correlation_id();

    // The API PUTs its result to a caller-provided URL, so presign an
    // uploadable URL for the disparity map first.
    let put_disparity_url = store.presign_put(DISPARITY_KEY).await?;

    println!("\nGenerating disparity: {correlation_id}...");
    client
        .generate_disparity(&DisparityRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            result_presigned_url: Some(&put_disparity_url),
        })
        .await?;

    // A GET URL for the same key demonstrates the upload succeeded, and is
    // reused below as the disparity input of the animation call. It is
    // optional if the disparity map is the only result you need.
    let get_disparity_url = store.presign_get(DISPARITY_KEY).await?;
    println!(
        "\nDisparity has been uploaded to the specified S3 bucket. \
         To view it, use this GET URL: {get_disparity_url}"
    );

    // The animation call follows the same shape: fresh correlation id,
    // uploadable URL, then the request.
    let correlation_id = new_correlation_id();
    let put_animation_url = store.presign_put(ANIMATION_KEY).await?;

    println!("\nGenerating mp4 animation: {correlation_id}...");
    client
        .generate_animation(&AnimationRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            input_disparity_url: Some(&get_disparity_url),
            result_presigned_url: Some(&put_animation_url),
            animation_length: None,
        })
        .await?;

    let get_animation_url = store.presign_get(ANIMATION_KEY).await?;
    println!(
        "\nMP4 animation has been uploaded to the specified S3 bucket. \
         To download it, use this GET URL: {get_animation_url}"
    );

    Ok(())
}
