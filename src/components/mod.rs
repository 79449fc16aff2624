//! UI Components
//!
//! Reusable Leptos components.

mod countdown;
mod dialog_host;
mod loading_overlay;
mod sidebar;
mod unauthorized;

pub use countdown::Countdown;
pub use dialog_host::DialogHost;
pub use loading_overlay::LoadingOverlay;
pub use sidebar::Sidebar;
pub use unauthorized::Unauthorized;
