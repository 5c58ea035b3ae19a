use log::info;
use std::sync::Arc;

use crate::modules::friend::{
    model::{FriendBadges, FriendListResponse, FriendTab},
    schema::FriendSuggestion,
};
use crate::store::Store;

#[derive(Clone)]
pub struct FriendService {
    store: Arc<Store>,
}

impl FriendService {
    pub fn with_dependencies(store: Arc<Store>) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { store }
    }

    pub fn suggestions(&self) -> Vec<FriendSuggestion> {
        self.store.state().friend.suggestions.clone()
    }

    pub fn list(&self, tab: FriendTab) -> FriendListResponse {
        let state = self.store.state();
        let entries = match tab {
            FriendTab::Blocked => &state.friend.blocked,
            FriendTab::Invited => &state.friend.invited,
            FriendTab::Received => &state.friend.received,
        };
        FriendListResponse { tab, entries: entries.clone() }
    }

    pub fn badges(&self) -> FriendBadges {
        let state = self.store.state();
        let friend = &state.friend;
        FriendBadges {
            suggestions: friend.suggestions.len(),
            management: friend.invited.len() + friend.blocked.len(),
        }
    }
}
