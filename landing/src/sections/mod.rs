// Page sections, top to bottom

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
