//! End-to-end flow using the provider's own storage endpoint.
//!
//! Upload URLs come from `get-upload-url` instead of a caller-owned bucket,
//! so no AWS setup is needed. Each generation response still carries a
//! presigned GET URL for the finished artifact.
//!
//! To run this demo you must set `BACKEND_CLIENT_ID` and
//! `BACKEND_CLIENT_SECRET`.
//!
//! Usage:
//! `cargo run --example using_leiapix_storage_api`

use leiapix::{
    new_correlation_id, original_image_url, AnimationRequest, Credentials, DisparityRequest,
    LeiaClient, LeiaError,
};

const DISPARITY_FILE_NAME: &str = "disparity.jpg";
const ANIMATION_FILE_NAME: &str = "animation.mp4";

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

    if let Err(err) = run(&credentials).await {
        match err {
            LeiaError::Provider { status, body } => {
                eprintln!("Error. Media API request failed with status {status}");
                eprintln!("Error body: {body}");
            }
            other => eprintln!("Error. Unhandled exception: {other}"),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn media_type_of(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

async fn run(credentials: &Credentials) -> Result<(), LeiaError> {
    println!("Acquiring access token from LeiaLogin...");
    let client = LeiaClient::login(credentials).await?;
    println!("\nLeiaLogin AccessToken acquired: {}", client.access_token());

    let image_url = original_image_url();

    let correlation_id = new_correlation_id();

    // The provider's temporary storage hands out one uploadable URL per
    // artifact; the API will PUT the disparity map there.
    let put_disparity_url = client
        .get_upload_url(
            &correlation_id,
            DISPARITY_FILE_NAME,
            &media_type_of(DISPARITY_FILE_NAME),
        )
        .await?;

    println!("\nGenerating disparity: {correlation_id}...");
    let disparity = client
        .generate_disparity(&DisparityRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            result_presigned_url: Some(&put_disparity_url),
        })
        .await?;

    let get_disparity_url = disparity.result_presigned_url.unwrap_or_default();
    println!(
        "\nDisparity has been uploaded to the temporary storage. \
         To view it, use this GET URL: {get_disparity_url}"
    );

    let correlation_id = new_correlation_id();
    let put_animation_url = client
        .get_upload_url(
            &correlation_id,
            ANIMATION_FILE_NAME,
            &media_type_of(ANIMATION_FILE_NAME),
        )
        .await?;

    println!("\nGenerating mp4 animation: {correlation_id}...");
    // The disparity input is the upload URL from the first step; the
    // provider's storage accepts the same URL for reading it back.
    let animation = client
        .generate_animation(&AnimationRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            input_disparity_url: Some(&put_disparity_url),
            result_presigned_url: Some(&put_animation_url),
            animation_length: Some(5),
        })
        .await?;

    // The result URL has a short expiration period, so download the file as
    // soon as possible.
    let get_animation_url = animation.result_presigned_url.unwrap_or_default();
    println!(
        "\nMP4 animation has been uploaded to the temporary storage. \
         To download it, use this GET URL: {get_animation_url}"
    );

    Ok(())
}
