use serde::{Deserialize, Serialize};

use crate::modules::friend::schema::FriendEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendTab {
    #[default]
    Blocked,
    Invited,
    Received,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendQuery {
    #[serde(default)]
    pub tab: FriendTab,
}

#[derive(Debug, Clone, Serialize)]
pub struct FriendListResponse {
    pub tab: FriendTab,
    pub entries: Vec<FriendEntry>,
}

/// Counters shown on the header icons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendBadges {
    pub suggestions: usize,
    /// Invited plus blocked; received requests are not counted.
    pub management: usize,
}
