//! Epoch-seconds timestamp encoding.
//!
//! The service sends timestamps as seconds since the Unix epoch, either as an
//! integer or with a fractional part. In memory they are `DateTime<Utc>`.

use chrono::{DateTime, Utc};

/// Convert fractional epoch seconds to a UTC timestamp.
///
/// Returns `None` for non-finite or out-of-range values.
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// Convert a UTC timestamp to fractional epoch seconds.
pub fn to_epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_millis()) / 1000.0
}

/// Serde adapter for `Option<DateTime<Utc>>` fields carried as epoch seconds.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) if ts.timestamp_subsec_millis() == 0 => serializer.serialize_i64(ts.timestamp()),
            Some(ts) => serializer.serialize_f64(super::to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(secs) => super::from_epoch_seconds(secs)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", secs))),
            None => Ok(None),
        }
    }
}
