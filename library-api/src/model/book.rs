use serde::{Deserialize, Serialize};

use crate::model::author::AuthorId;

/// A book and the ordered list of authors it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    #[serde(rename = "authorIDs")]
    pub author_ids: Vec<AuthorId>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl_resource_id!(BookId);

impl Book {
    pub fn new<N: Into<String>>(id: BookId, name: N, author_ids: Vec<AuthorId>) -> Self {
        Self {
            id,
            name: name.into(),
            author_ids,
        }
    }

    pub fn is_written_by(&self, author_id: &AuthorId) -> bool {
        self.author_ids.contains(author_id)
    }
}
