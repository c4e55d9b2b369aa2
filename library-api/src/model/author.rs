use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl_resource_id!(AuthorId);

impl Author {
    pub fn new<N: Into<String>>(id: AuthorId, name: N) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
