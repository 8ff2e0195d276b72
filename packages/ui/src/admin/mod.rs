//! Dashboard editors for the three content tables.

mod about_manager;
pub mod forms;
mod news_manager;
mod projects_manager;

pub use about_manager::AboutManager;
pub use news_manager::NewsManager;
pub use projects_manager::ProjectsManager;
