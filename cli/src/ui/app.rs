//! Shell layout and the interactive browser
//!
//! The shell is the persistent layout: header on top, the resolved page in
//! the content region, key hints at the bottom. The interactive `App`
//! component wraps the shell with navigation state and the entrance
//! animation.

use crate::ui::animation::{eased_progress, UiAnimationConfig};
use crate::ui::components::Header;
use crate::ui::pages::{page_element, NotFoundPage};
use crate::ui::theme;
use anyhow::Result;
use folio_core::route::Page;
use folio_core::Router;
use iocraft::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Key hints shown in the footer.
const FOOTER_HINTS: &str = "Use Left/Right or 1-4 to navigate, b to go back, q to quit";

/// What the shell mounts in its content region.
#[derive(Debug, Clone)]
pub enum ShellView {
    /// A page from the route table
    Page(Page),
    /// The fallback page, with the path that failed to resolve
    NotFound(String),
}

impl Default for ShellView {
    fn default() -> Self {
        Self::Page(Page::Home)
    }
}

/// Properties for the shell component
#[derive(Props)]
pub struct ShellProps {
    /// Content to mount below the header
    pub view: ShellView,
    /// Entrance animation progress, 1.0 = fully revealed
    pub reveal: f64,
}

impl Default for ShellProps {
    fn default() -> Self {
        Self {
            view: ShellView::default(),
            reveal: 1.0,
        }
    }
}

/// Shell component: persistent header plus the mounted page.
#[component]
pub fn Shell(_hooks: Hooks, props: &ShellProps) -> impl Into<AnyElement<'static>> {
    let active = match &props.view {
        ShellView::Page(page) => Some(*page),
        ShellView::NotFound(_) => None,
    };
    let content = match &props.view {
        ShellView::Page(page) => page_element(*page, props.reveal),
        ShellView::NotFound(path) => element! { NotFoundPage(path: path.clone()) }.into(),
    };

    element! {
        View(
            key: "shell",
            flex_direction: FlexDirection::Column,
            width: 100pct,
        ) {
            Header(active: active)
            View(key: "content-region", flex_grow: 1.0, width: 100pct) {
                #(content)
            }
            View(key: "footer", padding_left: 1) {
                Text(content: FOOTER_HINTS, color: theme::MUTED)
            }
        }
    }
}

/// A shareable handle to control the router from event handlers.
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    /// Navigate to a known page
    pub fn navigate_to(&self, page: Page) {
        self.0.lock().unwrap().navigate_to(page);
    }

    /// Go back to the previous page
    pub fn go_back(&self) -> bool {
        self.0.lock().unwrap().go_back()
    }

    /// Get the currently mounted page
    pub fn current(&self) -> Page {
        self.0.lock().unwrap().current()
    }
}

/// Properties for the interactive browser component
#[derive(Props)]
pub struct AppProps {
    /// Router handle for navigation control
    pub handle: RouterHandle,
    /// Animation configuration
    pub anim: UiAnimationConfig,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            handle: RouterHandle::new(Router::default()),
            anim: UiAnimationConfig::default(),
        }
    }
}

/// Interactive browser component: the shell plus keyboard navigation and
/// the entrance animation.
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let handle = props.handle.clone();

    let entered_at = hooks.use_state(Instant::now);
    let tick = hooks.use_state(|| 0u64);
    let should_exit = hooks.use_state(|| false);

    // Animation frame ticker; idle once the entrance has settled
    hooks.use_future({
        let mut tick = tick;
        let entered_at = entered_at;
        let anim = props.anim.clone();
        async move {
            if !anim.enabled {
                return;
            }
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(anim.frame_interval_ms)).await;
                let elapsed_ms = entered_at.get().elapsed().as_millis() as u64;
                if elapsed_ms <= anim.duration_ms + anim.frame_interval_ms {
                    tick.set(tick.get() + 1);
                }
            }
        }
    });

    // Keyboard navigation
    hooks.use_terminal_events({
        let handle = handle.clone();
        let mut entered_at = entered_at;
        let mut should_exit = should_exit;
        move |event| {
            if let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event {
                if kind == KeyEventKind::Release {
                    return;
                }
                let previous = handle.current();
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_exit.set(true);
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = c as usize - '1' as usize;
                        handle.navigate_to(Page::ALL[index]);
                    }
                    KeyCode::Left => {
                        let index = Page::ALL
                            .iter()
                            .position(|page| *page == previous)
                            .unwrap_or(0);
                        let count = Page::ALL.len();
                        handle.navigate_to(Page::ALL[(index + count - 1) % count]);
                    }
                    KeyCode::Right | KeyCode::Tab => {
                        let index = Page::ALL
                            .iter()
                            .position(|page| *page == previous)
                            .unwrap_or(0);
                        handle.navigate_to(Page::ALL[(index + 1) % Page::ALL.len()]);
                    }
                    KeyCode::Char('b') | KeyCode::Backspace => {
                        handle.go_back();
                    }
                    _ => {}
                }
                // A page change restarts the entrance animation and
                // triggers a re-render
                if handle.current() != previous {
                    entered_at.set(Instant::now());
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let page = handle.current();
    let reveal = eased_progress(&props.anim, entered_at.get().elapsed());

    element! {
        View(
            key: "app",
            width: 100pct,
            height: 100pct,
        ) {
            Shell(view: ShellView::Page(page), reveal: reveal)
        }
    }
}

/// Open the interactive browser at the given start page.
pub async fn run_browser(start: Page, anim: UiAnimationConfig) -> Result<()> {
    let handle = RouterHandle::new(Router::new(start));
    element! { App(handle: handle, anim: anim) }.fullscreen().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content;
    use folio_core::route::routes;

    fn render_page(page: Page) -> String {
        element! { Shell(view: ShellView::Page(page), reveal: 1.0) }.to_string()
    }

    #[test]
    fn test_home_mentions_site_name_in_header_and_headline() {
        let rendered = render_page(Page::Home);
        // Once in the header brand, once in the headline accent
        assert_eq!(rendered.matches(content::SITE_NAME).count(), 2);
    }

    #[test]
    fn test_every_page_renders_all_nav_entries() {
        for route in routes() {
            let rendered = render_page(route.page);
            for entry in routes() {
                assert!(
                    rendered.contains(entry.label),
                    "page {} is missing nav entry {}",
                    route.page,
                    entry.label
                );
            }
        }
    }

    #[test]
    fn test_home_renders_highlights() {
        let rendered = render_page(Page::Home);
        for highlight in &content::HIGHLIGHTS {
            assert!(rendered.contains(highlight.value));
            assert!(rendered.contains(highlight.label));
        }
    }

    #[test]
    fn test_home_renders_outbound_targets() {
        let rendered = render_page(Page::Home);
        for link in &content::SOCIAL_LINKS {
            assert!(rendered.contains(link.href));
        }
    }

    #[test]
    fn test_about_page_has_no_home_content() {
        let rendered = render_page(Page::About);
        assert!(rendered.contains("About Me"));
        for highlight in &content::HIGHLIGHTS {
            assert!(!rendered.contains(highlight.value));
        }
    }

    #[test]
    fn test_contact_page_heading() {
        let rendered = render_page(Page::Contact);
        assert!(rendered.contains("Contact Me"));
    }

    #[test]
    fn test_projects_page_heading() {
        let rendered = render_page(Page::Projects);
        assert!(rendered.contains("My Projects"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        for route in routes() {
            assert_eq!(render_page(route.page), render_page(route.page));
        }
    }

    #[test]
    fn test_fallback_view_names_the_path() {
        let rendered = element! {
            Shell(view: ShellView::NotFound("/blog".to_string()), reveal: 1.0)
        }
        .to_string();
        assert!(rendered.contains("Page Not Found"));
        assert!(rendered.contains("/blog"));
    }

    #[test]
    fn test_router_handle() {
        let handle = RouterHandle::new(Router::new(Page::Home));
        assert_eq!(handle.current(), Page::Home);

        handle.navigate_to(Page::About);
        assert_eq!(handle.current(), Page::About);

        assert!(handle.go_back());
        assert_eq!(handle.current(), Page::Home);
        assert!(!handle.go_back());
    }
}
