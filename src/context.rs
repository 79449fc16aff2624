//! Application Context
//!
//! Navigation and shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// Views inside the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Projects,
    AddProject,
    EditProject(u32),
    ProjectTasks(u32),
    AddTask(u32),
    EditTask { project_id: u32, task_id: u32 },
    Labels(u32),
    Sprints(u32),
    Profile,
    Settings,
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Login,
    Register,
    Dashboard(Page),
}

impl Screen {
    /// Landing screen for authenticated users
    pub fn home() -> Self {
        Screen::Dashboard(Page::Projects)
    }

    pub fn page(self) -> Option<Page> {
        match self {
            Screen::Dashboard(page) => Some(page),
            _ => None,
        }
    }
}

/// Top-level screen without the dashboard page, so page changes do not
/// remount the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Start,
    Login,
    Register,
    Dashboard,
}

impl From<Screen> for ScreenKind {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Start => ScreenKind::Start,
            Screen::Login => ScreenKind::Login,
            Screen::Register => ScreenKind::Register,
            Screen::Dashboard(_) => ScreenKind::Dashboard,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
    /// Trigger to reload the project list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the project list - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("[NAV] {:?}", screen);
        self.set_screen.set(screen);
    }

    /// Navigate within the dashboard
    pub fn go(&self, page: Page) {
        self.navigate(Screen::Dashboard(page));
    }

    /// Trigger a reload of projects
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_kind_ignores_page() {
        assert_eq!(
            ScreenKind::from(Screen::Dashboard(Page::Projects)),
            ScreenKind::from(Screen::Dashboard(Page::EditTask { project_id: 1, task_id: 2 }))
        );
        assert_ne!(ScreenKind::from(Screen::Login), ScreenKind::from(Screen::home()));
        assert_eq!(Screen::home().page(), Some(Page::Projects));
        assert_eq!(Screen::Start.page(), None);
    }
}
