//! Core domain library for Minutely (capture, layout, pagination, export).

/// Input-capture state machine for the canonical notes buffer.
pub mod capture;
/// Configuration loading and defaults.
pub mod config;
/// Application error types (export/parse).
pub mod error;
/// Artifact serialization and the render-backend boundary.
pub mod export;
/// Width-measured greedy text wrapping.
pub mod layout;
/// Data models for generated artifacts and wire payloads.
pub mod models;
/// Page-filling over wrapped lines.
pub mod paginate;
/// Recovery of generated artifacts from raw model output.
pub mod parse;
/// Shared text normalization helpers.
pub mod text;

pub use capture::{CaptureSession, CaptureSnapshot, SpeechCapture};
pub use config::Config;
pub use error::AppError;
pub use export::{ArtifactKind, RenderBackend};
pub use models::{ActionItem, GeneratedDocument, Minutes, Priority};
pub use paginate::{Page, PageGeometry, PagedDocument};
