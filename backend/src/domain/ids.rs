//! Opaque record identifiers.
//!
//! Every collection addresses its records by UUID. Each collection gets its
//! own newtype so a tour id can never be passed where a vehicle id is
//! expected.

use thiserror::Error;

/// Error returned when parsing an identifier from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// The input was empty or whitespace.
    #[error("{kind} must not be empty")]
    Empty {
        /// Human label of the identifier kind.
        kind: &'static str,
    },
    /// The input was not a UUID.
    #[error("{kind} must be a valid UUID")]
    Invalid {
        /// Human label of the identifier kind.
        kind: &'static str,
    },
}

macro_rules! define_uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Parse an identifier from its textual form.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdParseError> {
                let raw = raw.as_ref();
                if raw.trim().is_empty() {
                    return Err(IdParseError::Empty { kind: $label });
                }
                ::uuid::Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| IdParseError::Invalid { kind: $label })
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Borrow the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_uuid_id!(
    /// Identifier of a user account.
    UserId,
    "user id"
);
define_uuid_id!(
    /// Identifier of a booking record.
    BookingId,
    "booking id"
);
define_uuid_id!(
    /// Identifier of a review record.
    ReviewId,
    "review id"
);
define_uuid_id!(
    /// Identifier of a tour in the catalogue.
    TourId,
    "tour id"
);
define_uuid_id!(
    /// Identifier of a rentable vehicle.
    VehicleId,
    "vehicle id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", IdParseError::Empty { kind: "tour id" })]
    #[case("   ", IdParseError::Empty { kind: "tour id" })]
    #[case("tour-42", IdParseError::Invalid { kind: "tour id" })]
    fn rejects_malformed_ids(#[case] raw: &str, #[case] expected: IdParseError) {
        assert_eq!(TourId::new(raw), Err(expected));
    }

    #[rstest]
    fn serialises_as_bare_string() {
        let id = BookingId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::json!("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
    }

    #[rstest]
    fn error_message_names_the_kind() {
        let err = VehicleId::new("nope").expect_err("invalid id");
        assert_eq!(err.to_string(), "vehicle id must be a valid UUID");
    }
}
