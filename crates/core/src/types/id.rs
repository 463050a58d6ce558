//! Newtype IDs for type-safe entity references.
//!
//! Content-store documents are addressed by opaque string identifiers. Use
//! the `define_document_id!` macro to create type-safe wrappers that prevent
//! accidentally mixing IDs from different document types.

/// Macro to define a type-safe document ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use franemm_core::define_document_id;
/// define_document_id!(ProductId);
/// define_document_id!(PostId);
///
/// let product_id = ProductId::new("drafts.4ab7");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = PostId::new("drafts.4ab7");
/// ```
#[macro_export]
macro_rules! define_document_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

// Define standard document IDs
define_document_id!(ProductId);
define_document_id!(CategoryId);
define_document_id!(PostId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_round_trip() {
        let id = ProductId::new("a1b2c3");
        assert_eq!(id.as_str(), "a1b2c3");
        assert_eq!(id.to_string(), "a1b2c3");
        assert_eq!(id.into_inner(), "a1b2c3");
    }

    #[test]
    fn test_document_id_serde_transparent() {
        let id: PostId = serde_json::from_str("\"post-1\"").expect("valid id json");
        assert_eq!(id, PostId::new("post-1"));
        assert_eq!(
            serde_json::to_string(&id).expect("serializable"),
            "\"post-1\""
        );
    }
}
