//! Human-readable rendering of record fields.
//!
//! Records render as `{name: value, other: value}`, listing only the fields
//! that are present. Nested records render recursively and lists render as
//! `[a, b]`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// A value that can appear in a record's display rendering.
pub trait FieldValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_field_value!(i32, i64, f64, bool, String);

impl FieldValue for DateTime<Utc> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<V: FieldValue> FieldValue for BTreeMap<String, V> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", key)?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the `{name: value, ...}` frame of a record.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    /// Open the record frame.
    pub fn begin(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    /// Write one present field.
    pub fn field(&mut self, name: &str, value: &dyn FieldValue) -> fmt::Result {
        if !self.first {
            self.f.write_str(", ")?;
        }
        self.first = false;
        write!(self.f, "{}: ", name)?;
        value.fmt_value(self.f)
    }

    /// Close the record frame.
    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
