//! MediaConvert REST API client.
//!
//! This crate provides:
//! - Environment-driven configuration and static credentials
//! - AWS Signature Version 4 request signing
//! - A typed async client for every operation in `mcv-models`
//! - Retry with backoff, tracing spans and request metrics

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod retry;
pub mod signing;


pub use client::MediaConvertClient;
pub use config::{Credentials, MediaConvertConfig};
pub use error::{MediaConvertError, MediaConvertResult};
pub use retry::RetryConfig;
