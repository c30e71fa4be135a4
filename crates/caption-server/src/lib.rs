//! # caption-server
//!
//! HTTP service exposing the captioned speech API.
//!
//! Provides:
//! - `GET /health`: fixed status object
//! - `GET /v1/models`: static one-model listing
//! - `POST /dev/captioned_speech`: synthesize text, returning base64 WAV
//!   audio plus estimated word timestamps

pub mod api;
pub mod server;
pub mod service;

pub use server::{app_router, CaptionServer};
pub use service::AppState;
