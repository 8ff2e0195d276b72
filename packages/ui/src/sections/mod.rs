mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod hero;
pub use hero::Hero;

mod projects;
pub use projects::{ProjectCard, Projects};

mod skills;
pub use skills::Skills;
