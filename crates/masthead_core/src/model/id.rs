//! Typed identifiers for domain records.
//!
//! Each record kind gets its own newtype over `Uuid` so an author id can
//! never be passed where a magazine id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an externally provided UUID without validation.
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Stable identifier of an [`Author`](crate::model::author::Author).
    AuthorId
);
define_id!(
    /// Stable identifier of a [`Magazine`](crate::model::magazine::Magazine).
    MagazineId
);
define_id!(
    /// Stable identifier of an [`Article`](crate::model::article::Article).
    ArticleId
);

#[cfg(test)]
mod tests {
    use super::{AuthorId, MagazineId};
    use uuid::Uuid;

    #[test]
    fn generated_ids_are_unique_and_not_nil() {
        let first = AuthorId::new();
        let second = AuthorId::new();
        assert_ne!(first, second);
        assert!(!first.is_nil());
    }

    #[test]
    fn display_matches_inner_uuid() {
        let raw = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let id = MagazineId::from_uuid(raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.as_uuid(), raw);
    }
}
