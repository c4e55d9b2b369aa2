/// Implements the common traits of a string-backed resource id.
macro_rules! impl_resource_id {
    ($name:ident) => {
        impl $name {
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            /// Generates a new random sortable id.
            #[must_use]
            pub fn generate() -> Self {
                Self(::ulid::Ulid::new().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::error::CommonError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s.trim();
                if id.is_empty() {
                    return Err($crate::model::error::CommonError::InvalidId);
                }
                Ok(Self(id.to_string()))
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

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

pub mod author;
pub mod book;
pub mod error;
