//! # runtime
//!
//! Runtime support for the captioned speech service:
//!
//! - Lazy, one-time model loading shared across requests
//! - The deterministic mock speech model
//! - Structured logging setup

pub mod loader;
pub mod logging;
pub mod mock;

pub use loader::ModelLoader;
pub use mock::{MockModel, MOCK_SAMPLE_RATE};
