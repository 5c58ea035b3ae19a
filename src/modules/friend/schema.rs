use serde::{Deserialize, Serialize};

use crate::store::list::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendSuggestion {
    pub id: String,
    pub name: String,
    /// Number of mutual friends.
    pub mutual: u32,
}

/// Entry of the blocked, invited and received lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendEntry {
    pub id: String,
    pub name: String,
}

impl FriendEntry {
    pub fn new(id: impl ToString, name: impl Into<String>) -> Self {
        FriendEntry { id: id.to_string(), name: name.into() }
    }
}

impl Identified for FriendSuggestion {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for FriendEntry {
    fn id(&self) -> &str {
        &self.id
    }
}
