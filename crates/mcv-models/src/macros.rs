//! Declarative generators for the wire enumerations and record shapes.
//!
//! Every enumeration and record in this crate is declared through one of
//! these two macros so that all of them share the same contract:
//!
//! - `string_enum!` declares a closed set of wire tokens with a bijective
//!   token/variant mapping, `FromStr`, `Display`, serde and schema support.
//! - `record!` declares a flat record of independently optional fields with
//!   fluent `with_*` setters, value equality, a present-fields-only `Display`,
//!   camelCase serde and `validator` support.

/// Declare a closed string enumeration.
///
/// ```ignore
/// string_enum! {
///     /// Rate control mode.
///     pub enum RateControlMode {
///         Vbr => "VBR",
///         Cbr => "CBR",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every declared variant, in schema order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire token for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Returns every declared wire token, in schema order.
            pub fn values() -> ::std::vec::Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ParseEnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    "" => Err($crate::error::ParseEnumError::empty(stringify!($name))),
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::error::ParseEnumError::unknown(stringify!($name), other)),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::ParseEnumError;

            fn try_from(s: &str) -> ::std::result::Result<Self, $crate::error::ParseEnumError> {
                s.parse()
            }
        }

        impl $crate::display::FieldValue for $name {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declare a flat record of optional fields.
///
/// Each field is written as `name: Type => setter`; the generated struct
/// stores it as a public `Option<Type>`. Attributes placed on a field
/// (docs, `#[validate(...)]`, extra `#[serde(...)]`) are forwarded.
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $setter:ident
            ),* $(,)?
        }
    ) => {
        // `#[validate(nested)]` calls `.validate()` on the field in the invoking module.
        #[allow(unused_imports)]
        use ::validator::Validate as _;

        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
            ::validator::Validate,
        )]
        #[serde(rename_all = "camelCase")]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: ::std::option::Option<$ty>,
            )*
        }

        impl $name {
            /// Create an instance with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets `", stringify!($field), "` and returns the updated value.")]
                pub fn $setter(mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                    self.$field = ::std::option::Option::Some(value.into());
                    self
                }
            )*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut fields = $crate::display::FieldWriter::begin(f)?;
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        fields.field(stringify!($field), value)?;
                    }
                )*
                fields.finish()
            }
        }

        impl $crate::display::FieldValue for $name {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}
