//! Typed models for the MediaConvert control-plane API.
//!
//! This crate provides Serde-serializable types for:
//! - Closed string enumerations of every settings option
//! - Job, queue and job-template records
//! - Video, audio, caption, container and output-group settings
//! - Request/response shapes and their REST bindings
//!
//! Records are plain values: every field is optional, setters are fluent,
//! and `validator` checks the documented ranges and patterns locally.

#[macro_use]
mod macros;

pub mod audio;
pub mod captions;
pub mod container;
pub mod display;
pub mod error;
pub mod input;
pub mod job;
pub mod language;
pub mod operations;
pub mod output_group;
pub mod queue;
pub mod timestamp;
pub mod validation;
pub mod video;

// Re-export common types
pub use error::{MarshalError, MarshalResult, ParseEnumError};
pub use job::{Job, JobSettings, JobStatus, JobTemplate};
pub use language::LanguageCode;
pub use operations::{HttpMethod, HttpRequest, Operation};
pub use queue::{Queue, QueueStatus};
pub use validator::{Validate, ValidationErrors};
