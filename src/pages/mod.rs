//! Site Pages

mod about;
mod articles;
mod contact;
mod home;
mod not_found;
mod projects;
mod services;

pub use about::AboutPage;
pub use articles::ArticlesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use services::ServicesPage;
