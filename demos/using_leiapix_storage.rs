//! Simplest end-to-end flow: the provider stores every result itself.
//!
//! No result URLs are provisioned up front. Each generation response carries
//! a short-lived presigned GET URL for its artifact; the disparity URL is
//! forwarded into the animation request so the map is not regenerated.
//!
//! To run this demo you must set `BACKEND_CLIENT_ID` and
//! `BACKEND_CLIENT_SECRET`.
//!
//! Usage:
//! `cargo run --example using_leiapix_storage`

use leiapix::{
    new_correlation_id, original_image_url, AnimationRequest, Credentials, DisparityRequest,
    LeiaClient, LeiaError,
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

async fn run(credentials: &Credentials) -> Result<(), LeiaError> {
    println!("Acquiring access token from LeiaLogin...");
    let client = LeiaClient::login(credentials).await?;
    println!("\nLeiaLogin AccessToken acquired: {}", client.access_token());

    let image_url = original_image_url();

    let correlation_id = new_correlation_id();
    println!("\nGenerating disparity with correlationId: {correlation_id}...");

    // Only the required parameters: the provider stores the disparity map in
    // its own temporary storage and returns a download URL for it.
    let disparity = client
        .generate_disparity(&DisparityRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            result_presigned_url: None,
        })
        .await?;

    let get_disparity_url = disparity.result_presigned_url.unwrap_or_default();
    println!(
        "\nDisparity has been uploaded to the temporary storage. \
         To view it, use this GET URL: {get_disparity_url}"
    );

    let correlation_id = new_correlation_id();
    println!("\nGenerating mp4 animation with correlationId: {correlation_id}...");

    // Forwarding the disparity URL is optional; without it the provider
    // generates a new disparity map automatically.
    let animation = client
        .generate_animation(&AnimationRequest {
            correlation_id: &correlation_id,
            input_image_url: &image_url,
            input_disparity_url: Some(&get_disparity_url),
            result_presigned_url: None,
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
