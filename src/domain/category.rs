//! Category records and the id-to-label mapping returned to clients.

use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::FromRow;

/// A question category. Read-only from the service's perspective.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, serde::Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, serialized as a JSON object `{"<id>": "<type>"}`.
///
/// Entries keep the order they were built in (by type label when produced by
/// the store), although clients must treat the object as unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap(Vec<(i64, String)>);

impl CategoryMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.0
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, label)| label.as_str())
    }
}

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        CategoryMap(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, label) in &self.0 {
            map.serialize_entry(id, label)?;
        }
        map.end()
    }
}
