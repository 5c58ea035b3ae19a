use log::info;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::error;
use crate::modules::chat::slice::ChatAction;
use crate::modules::notification::{
    model::{
        NotificationTab, NotificationsResponse, OpenedNotification, PanelView, ScrollPosition,
    },
    panel::NotificationPanel,
    schema::Notification,
    slice::NotificationAction,
};
use crate::store::{list, Store};

#[derive(Clone)]
pub struct NotificationService {
    store: Arc<Store>,
    panel: Arc<Mutex<NotificationPanel>>,
}

impl NotificationService {
    pub fn with_dependencies(store: Arc<Store>) -> Self {
        info!("NotificationService initialized with dependencies");
        NotificationService { store, panel: Arc::new(Mutex::new(NotificationPanel::default())) }
    }

    fn panel(&self) -> MutexGuard<'_, NotificationPanel> {
        self.panel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> NotificationsResponse {
        let state = self.store.state();
        NotificationsResponse {
            notifications: state.notification.notifications.clone(),
            unread_count: state.notification.unread_count(),
        }
    }

    pub fn panel_view(&self) -> PanelView {
        self.panel().view(&self.store.state().notification)
    }

    pub fn toggle_panel(&self) -> PanelView {
        let mut panel = self.panel();
        panel.toggle();
        panel.view(&self.store.state().notification)
    }

    pub fn close_panel(&self) -> PanelView {
        let mut panel = self.panel();
        panel.close();
        panel.view(&self.store.state().notification)
    }

    pub fn select_tab(&self, tab: NotificationTab) -> PanelView {
        let mut panel = self.panel();
        panel.select_tab(tab);
        panel.view(&self.store.state().notification)
    }

    pub fn scroll(&self, position: ScrollPosition) -> PanelView {
        let state = self.store.state();
        let mut panel = self.panel();
        let filtered_len = panel.filtered_len(&state.notification);
        if panel.on_scroll(position, filtered_len) {
            log::debug!("Notification panel advanced to page {}", panel.page);
        }
        panel.view(&state.notification)
    }

    /// Marks the entry read, jumps to the chat with its user when that user is on
    /// the roster, and closes the panel.
    pub fn open_notification(&self, id: &str) -> Result<OpenedNotification, error::SystemError> {
        let state = self.store.state();
        let notification = list::find_by_id(&state.notification.notifications, id)
            .cloned()
            .ok_or_else(|| error::SystemError::not_found("Notification not found"))?;

        if !notification.read {
            self.store.dispatch(NotificationAction::MarkRead(notification.id.clone()));
        }

        let selected_user =
            list::find_by_id(&state.chat.online_users, &notification.user_id).cloned();
        if let Some(user) = &selected_user {
            self.store.dispatch(ChatAction::SelectUser(Some(user.id.clone())));
        }

        self.panel().close();

        Ok(OpenedNotification {
            notification: Notification { read: true, ..notification },
            selected_user,
        })
    }

    pub fn mark_all_read(&self) -> NotificationsResponse {
        self.store.dispatch(NotificationAction::MarkAllRead);
        self.list()
    }
}
