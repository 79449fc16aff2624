//! Theme Service
//!
//! Light/dark mode, loaded from and saved to the user's settings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::{SettingsPatch, ThemeMode};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(ThemeMode::default()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Switch locally without saving
    pub fn apply(&self, mode: ThemeMode) {
        if self.mode.get_untracked() != mode {
            self.mode.set(mode);
        }
    }

    /// Pull the saved mode from settings
    pub fn load(&self, api: &ApiClient) {
        let theme = *self;
        let api = api.clone();
        spawn_local(async move {
            match api.get_settings().await {
                Ok(settings) => theme.apply(settings.theme_mode),
                // Expected before login
                Err(err) => log::debug!("[THEME] settings not loaded: {}", err),
            }
        });
    }

    /// Switch and persist
    pub fn set_mode(&self, api: &ApiClient, mode: ThemeMode) {
        self.apply(mode);
        let api = api.clone();
        spawn_local(async move {
            let patch = SettingsPatch {
                theme_mode: Some(mode),
                ..Default::default()
            };
            if let Err(err) = api.update_settings(&patch).await {
                log::error!("[THEME] failed to save theme: {}", err);
            }
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
