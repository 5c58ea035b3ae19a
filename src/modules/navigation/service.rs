use crate::modules::navigation::model::{Guard, Page};

/// Chat is for signed-in users; home and the auth forms are for everyone else.
pub fn guard(page: Page, authenticated: bool) -> Guard {
    match (page, authenticated) {
        (Page::Chat, false) | (Page::Home, false) => Guard::Redirect(Page::Login),
        (Page::Home | Page::Login | Page::Register, true) => Guard::Redirect(Page::Chat),
        (page, _) => Guard::Render(page),
    }
}
