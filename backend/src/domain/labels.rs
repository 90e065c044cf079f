//! Closed string-labelled enumerations shared by the catalogue and bookings.
//!
//! Each enum stores as its wire label (e.g. `"Hill Country"`) in every
//! adapter, so the label table lives in one place per type.

use thiserror::Error;

/// Error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownLabel {
    /// Human name of the enumeration.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

macro_rules! define_label_enum {
    (
        $(#[$outer:meta])*
        $name:ident, $kind:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire label.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::labels::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err($crate::domain::labels::UnknownLabel {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use define_label_enum;
