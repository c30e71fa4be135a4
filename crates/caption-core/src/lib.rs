//! # caption-core
//!
//! Core types, traits, and error definitions for the captioned speech
//! service.
//!
//! This crate provides the foundational abstractions used across all other
//! crates in the workspace, including:
//!
//! - Common data types (`AudioSegment`, `AudioBuffer`, `WordTimestamp`)
//! - The `SpeechModel` trait seam for the external synthesis backend
//! - Unified error handling via `CaptionError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{ModelConfig, ServerConfig};
pub use error::{CaptionError, CaptionResult};
pub use traits::{SegmentIter, SpeechModel, SynthesisOptions};
pub use types::{AudioBuffer, AudioSegment, Lang, WordTimestamp};
