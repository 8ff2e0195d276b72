mod modal_overlay;
pub use modal_overlay::{confirm, ModalOverlay};

mod status;
pub use status::{ErrorText, Field, SectionTitle, Spinner};

mod project_details;
pub use project_details::ProjectDetailsView;
