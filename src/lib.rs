//! An unofficial Rust client for the LeiaPix Media Cloud API.
//!
//! This crate provides a convenient, asynchronous interface for turning 2D
//! photos into disparity maps and short animations via the LeiaPix Cloud
//! REST API. It handles OAuth2 client-credentials authentication, request
//! construction, error handling, and result-URL plumbing, allowing you to
//! focus on your application's core logic.
//!
//! ## Features
//! - Disparity-map and animation generation from a single image URL.
//! - OAuth2 client-credentials login against LeiaLogin.
//! - Two storage strategies: self-managed S3 presigned URLs, or the
//!   provider's temporary storage (in-band result URLs and the
//!   `get-upload-url` endpoint).
//! - Helper for downloading generated artifacts before their URLs expire.
//! - Typed error handling for robust applications.
//!
//! The `demos/` directory contains three runnable programs, one per storage
//! strategy, mirroring the intended end-to-end call order: login, provision
//! result URLs, generate the disparity map, generate the animation.

pub mod client;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use client::LeiaClient;
pub use config::{original_image_url, Credentials, StorageConfig, DEFAULT_IMAGE_URL};
pub use error::LeiaError;
pub use storage::{ArtifactStore, ANIMATION_KEY, DISPARITY_KEY};
pub use types::{new_correlation_id, AnimationRequest, DisparityRequest, GenerationResult};
