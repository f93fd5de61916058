//! Page components for the portfolio site
//!
//! Each page is a stateless component: its output is a pure function of its
//! props, and rendering the same page twice produces identical output.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;

// Re-export commonly used types
pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;

use folio_core::Page;
use iocraft::prelude::*;

/// Mount the page component for a resolved route.
///
/// This is the closed switch from page identifier to rendering function;
/// adding a page to the route table forces a new arm here.
pub fn page_element(page: Page, reveal: f64) -> AnyElement<'static> {
    match page {
        Page::Home => element! { HomePage(reveal: reveal) }.into(),
        Page::About => element! { AboutPage(reveal: reveal) }.into(),
        Page::Projects => element! { ProjectsPage(reveal: reveal) }.into(),
        Page::Contact => element! { ContactPage(reveal: reveal) }.into(),
    }
}
