use serde::Serialize;

use crate::modules::auth::model::SessionUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Login,
    Register,
    Chat,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Chat => "/chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Render(Page),
    Redirect(Page),
}

/// What a page would render with, in place of the markup.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub page: Page,
    pub path: &'static str,
    pub user: Option<SessionUser>,
}
