//! UI components for the landing page.

mod app;
mod home;
mod lead_section;
mod logo;
mod nav;
mod pages;
mod welcome;

pub use app::App;
pub use home::HomePage;
pub use lead_section::LeadSection;
pub use logo::Logo;
pub use nav::{follow_link, go_back, NavLink, SiteHeader};
pub use pages::{AboutPage, NotFoundPage, ServicesPage};
pub use welcome::WelcomeScreen;
