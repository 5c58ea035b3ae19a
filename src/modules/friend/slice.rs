use serde::{Deserialize, Serialize};

use crate::modules::friend::schema::{FriendEntry, FriendSuggestion};
use crate::store::{list, Slice};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendState {
    pub suggestions: Vec<FriendSuggestion>,
    pub blocked: Vec<FriendEntry>,
    pub invited: Vec<FriendEntry>,
    pub received: Vec<FriendEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

fn seed_suggestions() -> Vec<FriendSuggestion> {
    let named = [("1", "Alice", 2), ("2", "Bob", 1), ("3", "Charlie", 0)].into_iter().map(
        |(id, name, mutual)| FriendSuggestion { id: id.into(), name: name.into(), mutual },
    );
    let generated = (0..20u32).map(|i| FriendSuggestion {
        id: (i + 4).to_string(),
        name: format!("Friend Suggestion {}", i + 4),
        mutual: i % 5,
    });
    named.chain(generated).collect()
}

/// Named entries followed by `count` generated ones whose ids start at `first_id`.
fn seed_entries(
    named: &[(&str, &str)],
    count: usize,
    first_id: usize,
    label: impl Fn(usize) -> String,
) -> Vec<FriendEntry> {
    named
        .iter()
        .map(|(id, name)| FriendEntry::new(id, *name))
        .chain((0..count).map(|i| FriendEntry::new(first_id + i, label(i))))
        .collect()
}

impl Default for FriendState {
    fn default() -> Self {
        Self {
            suggestions: seed_suggestions(),
            blocked: seed_entries(&[("4", "Eve"), ("5", "Mallory")], 12, 6, |i| {
                format!("Blocked User {}", i + 6)
            }),
            invited: seed_entries(&[("6", "Trent"), ("7", "Oscar")], 15, 8, |i| {
                format!("Invited User {}", i + 8)
            }),
            received: seed_entries(
                &[("100", "User Request 1"), ("101", "User Request 2"), ("102", "User Request 3")],
                8,
                110,
                |i| format!("User Request {}", i + 4),
            ),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum FriendAction {
    AddSuggestion(FriendSuggestion),
    RemoveSuggestion(String),
    AddBlocked(FriendEntry),
    RemoveBlocked(String),
    AddInvited(FriendEntry),
    RemoveInvited(String),
    AddReceived(FriendEntry),
    RemoveReceived(String),
    SetSuggestions(Vec<FriendSuggestion>),
    SetBlocked(Vec<FriendEntry>),
    SetInvited(Vec<FriendEntry>),
    SetReceived(Vec<FriendEntry>),
    SetLoading(bool),
    SetError(Option<String>),
    ClearAll,
}

impl FriendAction {
    pub fn kind(&self) -> &'static str {
        match self {
            FriendAction::AddSuggestion(_) => "friend/addSuggestion",
            FriendAction::RemoveSuggestion(_) => "friend/removeSuggestion",
            FriendAction::AddBlocked(_) => "friend/addBlockedUser",
            FriendAction::RemoveBlocked(_) => "friend/removeBlockedUser",
            FriendAction::AddInvited(_) => "friend/addInvitedUser",
            FriendAction::RemoveInvited(_) => "friend/removeInvitedUser",
            FriendAction::AddReceived(_) => "friend/addReceivedRequest",
            FriendAction::RemoveReceived(_) => "friend/removeReceivedRequest",
            FriendAction::SetSuggestions(_) => "friend/setSuggestions",
            FriendAction::SetBlocked(_) => "friend/setBlockedUsers",
            FriendAction::SetInvited(_) => "friend/setInvitedUsers",
            FriendAction::SetReceived(_) => "friend/setReceivedRequests",
            FriendAction::SetLoading(_) => "friend/setLoading",
            FriendAction::SetError(_) => "friend/setError",
            FriendAction::ClearAll => "friend/clearAll",
        }
    }
}

impl Slice for FriendState {
    type Action = FriendAction;

    fn reduce(&self, action: FriendAction) -> Self {
        let mut next = self.clone();
        match action {
            FriendAction::AddSuggestion(s) => list::push_unique(&mut next.suggestions, s),
            FriendAction::RemoveSuggestion(id) => list::remove_by_id(&mut next.suggestions, &id),
            FriendAction::AddBlocked(e) => list::push_unique(&mut next.blocked, e),
            FriendAction::RemoveBlocked(id) => list::remove_by_id(&mut next.blocked, &id),
            FriendAction::AddInvited(e) => list::push_unique(&mut next.invited, e),
            FriendAction::RemoveInvited(id) => list::remove_by_id(&mut next.invited, &id),
            FriendAction::AddReceived(e) => list::push_unique(&mut next.received, e),
            FriendAction::RemoveReceived(id) => list::remove_by_id(&mut next.received, &id),
            FriendAction::SetSuggestions(s) => next.suggestions = list::dedup_by_id(s),
            FriendAction::SetBlocked(e) => next.blocked = list::dedup_by_id(e),
            FriendAction::SetInvited(e) => next.invited = list::dedup_by_id(e),
            FriendAction::SetReceived(e) => next.received = list::dedup_by_id(e),
            FriendAction::SetLoading(loading) => next.loading = loading,
            FriendAction::SetError(error) => next.error = error,
            FriendAction::ClearAll => {
                next.suggestions.clear();
                next.blocked.clear();
                next.invited.clear();
                next.received.clear();
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        let state = FriendState::default();
        assert_eq!(state.suggestions.len(), 23);
        assert_eq!(state.blocked.len(), 14);
        assert_eq!(state.invited.len(), 17);
        assert_eq!(state.received.len(), 11);
        assert_eq!(state.suggestions[4].name, "Friend Suggestion 5");
        assert_eq!(state.received.last().unwrap().id, "117");
    }

    #[test]
    fn test_add_and_remove_per_list() {
        let state = FriendState::default()
            .reduce(FriendAction::AddBlocked(FriendEntry::new("99", "Sybil")))
            .reduce(FriendAction::AddBlocked(FriendEntry::new("99", "Sybil again")))
            .reduce(FriendAction::RemoveInvited("6".into()))
            .reduce(FriendAction::RemoveReceived("missing".into()));

        assert_eq!(state.blocked.len(), 15);
        assert_eq!(state.blocked.last().unwrap().name, "Sybil");
        assert_eq!(state.invited.len(), 16);
        assert_eq!(state.received.len(), 11);
    }

    #[test]
    fn test_bulk_replace_and_clear() {
        let state = FriendState::default().reduce(FriendAction::SetSuggestions(vec![
            FriendSuggestion { id: "a".into(), name: "A".into(), mutual: 1 },
            FriendSuggestion { id: "a".into(), name: "dup".into(), mutual: 9 },
        ]));
        assert_eq!(state.suggestions.len(), 1);
        assert_eq!(state.suggestions[0].name, "A");

        let cleared = state.reduce(FriendAction::ClearAll);
        assert!(cleared.suggestions.is_empty() && cleared.blocked.is_empty());
        assert!(cleared.invited.is_empty() && cleared.received.is_empty());
        assert_eq!(state.blocked.len(), 14);
    }
}
