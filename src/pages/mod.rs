//! Screens and dashboard pages

mod dashboard;
mod labels;
mod login;
mod profile;
mod project_form;
mod project_tasks;
mod projects;
mod register;
mod settings;
mod sprints;
mod start;
mod task_form;

pub use dashboard::Dashboard;
pub use labels::LabelsPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use project_form::ProjectFormPage;
pub use project_tasks::ProjectTasksPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
pub use sprints::SprintsPage;
pub use start::StartPage;
pub use task_form::TaskFormPage;
