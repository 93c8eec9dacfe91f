//! The user record

use serde::{Deserialize, Serialize};

/// A user as persisted by the record store.
///
/// `id` is assigned by the record store on creation and never changes.
/// `name` is caller supplied and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
