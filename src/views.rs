//! Dashboard Views
//!
//! Named sections of each dashboard. The active view is the only state;
//! button highlight and section visibility are both derived from it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no section for view \"{0}\"")]
pub struct UnknownView(pub String);

impl UnknownView {
    /// Toast text for a dangling view reference
    pub fn notice(&self) -> String {
        format!("View Link Broken: {}", self.0)
    }
}

/// Data a view needs once it becomes active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLoad {
    Pending,
    Approved,
    MyItems,
    Nothing,
}

pub trait ViewName: Copy + PartialEq + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn load(&self) -> ViewLoad;

    /// Resolve a view reference coming from a nav button or the URL fragment
    fn parse(name: &str) -> Result<Self, UnknownView> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| UnknownView(name.to_string()))
    }
}

/// Resolve a switch request. On a dangling name `current` stays active.
pub fn switch_outcome<V: ViewName>(current: V, name: &str) -> (V, Result<ViewLoad, UnknownView>) {
    match V::parse(name) {
        Ok(view) => (view, Ok(view.load())),
        Err(err) => (current, Err(err)),
    }
}

/// View to open on page load: the one the URL fragment names, else the
/// default. A dangling fragment is handed back for reporting.
pub fn initial_view<V: ViewName + Default>(fragment: Option<&str>) -> (V, Option<UnknownView>) {
    match fragment.map(V::parse) {
        Some(Ok(view)) => (view, None),
        Some(Err(err)) => (V::default(), Some(err)),
        None => (V::default(), None),
    }
}

pub fn section_visible<V: ViewName>(active: V, section: V) -> bool {
    active == section
}

/// Inline `display` value for a section
pub fn section_display<V: ViewName>(active: V, section: V) -> &'static str {
    if section_visible(active, section) { "block" } else { "none" }
}

pub fn tab_class<V: ViewName>(active: V, tab: V) -> &'static str {
    if active == tab { "nav-btn active" } else { "nav-btn" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserView {
    #[default]
    Browse,
    Submissions,
}

impl ViewName for UserView {
    const ALL: &'static [Self] = &[UserView::Browse, UserView::Submissions];

    fn as_str(&self) -> &'static str {
        match self {
            UserView::Browse => "browse",
            UserView::Submissions => "submissions",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserView::Browse => "Browse Items",
            UserView::Submissions => "My Submissions",
        }
    }

    fn load(&self) -> ViewLoad {
        match self {
            UserView::Browse => ViewLoad::Approved,
            UserView::Submissions => ViewLoad::MyItems,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Pending,
    Approved,
    /// Placeholder tab, no loader behind it yet
    Users,
}

impl AdminView {
    /// Page heading. `None` keeps the previous heading.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            AdminView::Pending => Some("Moderation Queue"),
            AdminView::Approved => Some("Verified Items"),
            AdminView::Users => None,
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            AdminView::Pending => Some("Review and manage pending item reports"),
            AdminView::Approved => Some("Currently active and searchable items"),
            AdminView::Users => None,
        }
    }

    /// View whose heading shows after switching from `previous` to `self`
    pub fn heading_after(self, previous: AdminView) -> AdminView {
        if self.title().is_some() { self } else { previous }
    }
}

impl ViewName for AdminView {
    const ALL: &'static [Self] = &[AdminView::Pending, AdminView::Approved, AdminView::Users];

    fn as_str(&self) -> &'static str {
        match self {
            AdminView::Pending => "pending",
            AdminView::Approved => "approved",
            AdminView::Users => "users",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdminView::Pending => "Pending",
            AdminView::Approved => "Approved",
            AdminView::Users => "Users",
        }
    }

    fn load(&self) -> ViewLoad {
        match self {
            AdminView::Pending => ViewLoad::Pending,
            AdminView::Approved => ViewLoad::Approved,
            AdminView::Users => ViewLoad::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exactly_one_visible<V: ViewName>() {
        for &active in V::ALL {
            let visible = V::ALL.iter().filter(|&&s| section_visible(active, s)).count();
            assert_eq!(visible, 1, "active view {}", active.as_str());
            assert_eq!(section_display(active, active), "block");
        }
    }

    #[test]
    fn test_exactly_one_section_visible() {
        exactly_one_visible::<UserView>();
        exactly_one_visible::<AdminView>();
    }

    #[test]
    fn test_parse_known_views() {
        assert_eq!(UserView::parse("browse"), Ok(UserView::Browse));
        assert_eq!(UserView::parse(" submissions "), Ok(UserView::Submissions));
        assert_eq!(AdminView::parse("users"), Ok(AdminView::Users));
    }

    #[test]
    fn test_parse_dangling_reference() {
        assert_eq!(UserView::parse("settings"), Err(UnknownView("settings".into())));
        // admin-only views are not user views
        assert!(UserView::parse("pending").is_err());
        assert!(AdminView::parse("").is_err());
    }

    #[test]
    fn test_tab_class_follows_active_view() {
        assert_eq!(tab_class(UserView::Browse, UserView::Browse), "nav-btn active");
        assert_eq!(tab_class(UserView::Browse, UserView::Submissions), "nav-btn");
    }

    #[test]
    fn test_admin_titles() {
        assert_eq!(AdminView::Pending.title(), Some("Moderation Queue"));
        assert_eq!(AdminView::Approved.subtitle(), Some("Currently active and searchable items"));
        assert_eq!(AdminView::Users.title(), None);
    }

    #[test]
    fn test_users_tab_keeps_previous_heading() {
        assert_eq!(AdminView::Users.heading_after(AdminView::Approved), AdminView::Approved);
        assert_eq!(AdminView::Pending.heading_after(AdminView::Approved), AdminView::Pending);
    }

    #[test]
    fn test_switch_selects_view_and_loader() {
        assert_eq!(
            switch_outcome(UserView::Browse, "submissions"),
            (UserView::Submissions, Ok(ViewLoad::MyItems))
        );
        assert_eq!(
            switch_outcome(UserView::Submissions, "browse"),
            (UserView::Browse, Ok(ViewLoad::Approved))
        );
        assert_eq!(switch_outcome(AdminView::Pending, "users"), (AdminView::Users, Ok(ViewLoad::Nothing)));
    }

    #[test]
    fn test_switch_to_unknown_view_keeps_current() {
        let (view, load) = switch_outcome(UserView::Submissions, "settings");
        assert_eq!(view, UserView::Submissions);
        let err = load.unwrap_err();
        assert_eq!(err.notice(), "View Link Broken: settings");

        let (view, load) = switch_outcome(AdminView::Approved, "browse");
        assert_eq!(view, AdminView::Approved);
        assert!(load.is_err());
    }

    #[test]
    fn test_initial_view_from_fragment() {
        assert_eq!(initial_view::<UserView>(Some("submissions")), (UserView::Submissions, None));
        assert_eq!(initial_view::<UserView>(None), (UserView::Browse, None));

        // a dangling fragment is reported but the default view still loads
        let (view, dangling) = initial_view::<UserView>(Some("anything-unknown"));
        assert_eq!(view, UserView::Browse);
        assert_eq!(dangling, Some(UnknownView("anything-unknown".into())));
    }
}
