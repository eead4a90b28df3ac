//! Macro for implementing Display and FromStr for wire-named enums
//!
//! Several domain enums travel as plain strings in API payloads and session
//! data (`"authenticated"`, `"monthly-deliveries"`, `"TRANSF"`). This macro
//! gives each of them one mapping that drives both directions.
//!
//! # Example
//!
//! ```rust
//! use doppler_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ListState {
//!     Ready,
//!     Synchronizing,
//! }
//!
//! impl_wire_name_conversions!(ListState {
//!     Ready => "ready",
//!     Synchronizing => "synchronizingContacts",
//! });
//!
//! assert_eq!("READY".parse::<ListState>().unwrap(), ListState::Ready);
//! assert_eq!(ListState::Synchronizing.to_string(), "synchronizingContacts");
//! ```

/// Implements Display and FromStr traits for wire-named enums
///
/// This macro generates:
/// - Display trait: writes the exact wire name of the variant
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire names
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
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

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
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
