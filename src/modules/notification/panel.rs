//! View state of the notification dropdown. It belongs to one viewer, not to the
//! store: nothing else reads it and it never outlives the process.

use crate::constants::NOTIFICATIONS_PER_PAGE;
use crate::modules::notification::{
    model::{NotificationTab, PanelView, ScrollPosition},
    slice::NotificationState,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPanel {
    pub open: bool,
    pub tab: NotificationTab,
    pub page: usize,
}

impl Default for NotificationPanel {
    fn default() -> Self {
        Self { open: false, tab: NotificationTab::All, page: 1 }
    }
}

impl NotificationPanel {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.page = 1;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.page = 1;
    }

    pub fn select_tab(&mut self, tab: NotificationTab) {
        self.tab = tab;
        self.page = 1;
    }

    fn shown(&self, filtered_len: usize) -> usize {
        (self.page * NOTIFICATIONS_PER_PAGE).min(filtered_len)
    }

    /// Advances one page when the list is scrolled to its end and more entries
    /// exist. Returns whether the page changed.
    pub fn on_scroll(&mut self, position: ScrollPosition, filtered_len: usize) -> bool {
        if !self.open || !position.near_bottom() || self.shown(filtered_len) >= filtered_len {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn filtered_len(&self, state: &NotificationState) -> usize {
        state.notifications.iter().filter(|n| self.tab.matches(n)).count()
    }

    pub fn view(&self, state: &NotificationState) -> PanelView {
        let filtered: Vec<_> =
            state.notifications.iter().filter(|n| self.tab.matches(n)).cloned().collect();
        let total = filtered.len();
        let shown = self.shown(total);

        PanelView {
            open: self.open,
            tab: self.tab,
            page: self.page,
            notifications: filtered.into_iter().take(shown).collect(),
            total,
            has_more: shown < total,
            unread_count: state.unread_count(),
        }
    }
}
