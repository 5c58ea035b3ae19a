use serde::{Deserialize, Serialize};

use crate::constants::SCROLL_THRESHOLD_PX;
use crate::modules::chat::schema::OnlineUser;
use crate::modules::notification::schema::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
    Read,
}

impl NotificationTab {
    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            NotificationTab::All => true,
            NotificationTab::Unread => !notification.read,
            NotificationTab::Read => notification.read,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabBody {
    pub tab: NotificationTab,
}

/// Scroll metrics of the notification list element, in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollPosition {
    pub fn near_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - f64::from(SCROLL_THRESHOLD_PX)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub open: bool,
    pub tab: NotificationTab,
    pub page: usize,
    pub notifications: Vec<Notification>,
    pub total: usize,
    pub has_more: bool,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenedNotification {
    pub notification: Notification,
    pub selected_user: Option<OnlineUser>,
}
