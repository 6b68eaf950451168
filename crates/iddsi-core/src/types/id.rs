//! Newtype wrappers around store-assigned document identifiers.
//!
//! The document store hands out opaque string identifiers. Distinct types
//! keep a `RecipientId` from being passed where a `FoodId` is expected;
//! each converts to and from the untyped [`DocumentId`] at the repository
//! boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around an opaque `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from an existing string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

/// Macro to define a typed ID that converts to and from [`DocumentId`].
macro_rules! define_typed_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        define_id!($(#[$meta])* $name);

        impl From<DocumentId> for $name {
            fn from(id: DocumentId) -> Self {
                Self(id.0)
            }
        }

        impl From<$name> for DocumentId {
            fn from(id: $name) -> DocumentId {
                DocumentId(id.0)
            }
        }

        impl From<&$name> for DocumentId {
            fn from(id: &$name) -> DocumentId {
                DocumentId(id.0.clone())
            }
        }
    };
}

define_id!(
    /// Untyped identifier of a document within a collection.
    DocumentId
);

impl DocumentId {
    /// Generate a fresh store-side identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

define_typed_id!(
    /// Identifier of a catalog entry (food or drink).
    FoodId
);

define_typed_id!(
    /// Identifier of an app user receiving notifications.
    RecipientId
);

define_typed_id!(
    /// Identifier of a persisted notification.
    NotificationId
);

define_typed_id!(
    /// Identifier of a user-reported issue.
    IssueId
);
