mod home;
pub use home::Home;

mod project_details;
pub use project_details::ProjectDetails;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;
