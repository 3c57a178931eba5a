//! Field patterns the service enforces on string settings.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

/// `HH:MM:SS:FF` or `HH:MM:SS;FF` (drop-frame) timecodes.
pub static TIMECODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((([0-1]\d)|(2[0-3]))(:[0-5]\d){2}([:;][0-5]\d))$").expect("timecode pattern")
});

/// RFC 5646 style language tag, e.g. `eng` or `en-US`.
pub static CUSTOM_LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z-]+)?$").expect("language code pattern")
});

/// Audio stream names: word characters and whitespace only.
pub static STREAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s]*$").expect("stream name pattern"));

/// Output destinations must be S3 URIs.
pub static S3_DESTINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^s3://").expect("s3 destination pattern"));

/// Input locations: S3, HTTP or HTTPS URIs.
pub static FILE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(s3|https?)://").expect("file input pattern"));

/// Hex-encoded 128-bit value.
pub static HEX_128: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("hex pattern"));

fn check(pattern: &Regex, value: &str, code: &'static str) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

pub fn timecode(value: &str) -> Result<(), ValidationError> {
    check(&TIMECODE, value, "timecode")
}

pub fn custom_language_code(value: &str) -> Result<(), ValidationError> {
    check(&CUSTOM_LANGUAGE_CODE, value, "custom_language_code")
}

pub fn stream_name(value: &str) -> Result<(), ValidationError> {
    check(&STREAM_NAME, value, "stream_name")
}

pub fn s3_destination(value: &str) -> Result<(), ValidationError> {
    check(&S3_DESTINATION, value, "s3_destination")
}

pub fn file_input(value: &str) -> Result<(), ValidationError> {
    check(&FILE_INPUT, value, "file_input")
}

pub fn hex_128(value: &str) -> Result<(), ValidationError> {
    check(&HEX_128, value, "hex_128")
}
