//! App Services
//!
//! Long-lived reactive state created in the App root (or the dashboard) and
//! shared through context.

mod dialog;
mod idle_timer;
mod session;
mod theme;

pub use dialog::{use_dialog, DialogContext, DialogKind};
pub use idle_timer::{provide_idle_timer, use_idle_timer};
pub use session::{use_session, SessionState};
pub use theme::{use_theme, ThemeContext};
