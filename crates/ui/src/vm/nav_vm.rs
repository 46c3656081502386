use voice_core::model::Page;
use voice_core::{Session, nav_items};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBarVm {
    pub portal_label: &'static str,
    pub items: Vec<NavItemVm>,
}

#[must_use]
pub fn map_nav_bar(session: &Session) -> NavBarVm {
    let current = session.page();
    let items = nav_items(session.role())
        .iter()
        .map(|item| NavItemVm {
            page: item.page,
            label: item.label,
            active: current == Some(item.page),
        })
        .collect();

    NavBarVm {
        portal_label: session.role().portal_label(),
        items,
    }
}
