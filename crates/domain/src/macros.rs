//! Macro for implementing Display and FromStr for wire-name enums
//!
//! The API and the parameter schema refer to resources, operations and
//! option values by fixed names (`status`, `getFollowers`, `unlisted`).
//! This macro maps enum variants to those names in both directions.
//!
//! # Example
//!
//! ```rust
//! use tootbatch_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Direct,
//! }
//!
//! impl_wire_name_conversions!(Visibility {
//!     Public => "public",
//!     Direct => "direct",
//! });
//! ```

/// Implements Display, FromStr and `as_str` for wire-name enums
///
/// - `Display` writes the exact wire name
/// - `FromStr` matches case-insensitively, so `getfollowers` and
///   `getFollowers` both parse
/// - `as_str` returns the wire name as `&'static str`
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant,)+];

            /// Wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
