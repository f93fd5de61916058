//! Navigation state for the shell
//!
//! This module provides the router that owns the currently mounted page and
//! a bounded navigation history.

use crate::route::{resolve, Page};

/// Structured error type for router operations
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("no route matches path '{0}'")]
    RouteNotFound(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Current state of the router
#[derive(Debug, Clone)]
struct RouterState {
    /// Currently mounted page
    current: Page,
    /// Navigation history (most recent first)
    history: Vec<Page>,
    /// Maximum number of history entries to keep
    max_history: usize,
}

impl RouterState {
    fn new(initial: Page, max_history: usize) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            max_history,
        }
    }

    fn navigate_to(&mut self, page: Page) {
        // Re-mounting the current page is a no-op for history
        if self.current != page {
            self.history.insert(0, self.current);
            if self.history.len() > self.max_history {
                self.history.truncate(self.max_history);
            }
        }
        self.current = page;
    }

    fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current = self.history.remove(0);
        true
    }
}

/// Router owning the navigation state.
///
/// The route table itself is compile-time constant; the router only tracks
/// which page is mounted and where the user has been.
#[derive(Debug, Clone)]
pub struct Router {
    state: RouterState,
}

impl Router {
    /// Default history bound, plenty for a four-page site.
    pub const DEFAULT_MAX_HISTORY: usize = 50;

    /// Create a router mounted at the given page.
    pub fn new(initial: Page) -> Self {
        Self {
            state: RouterState::new(initial, Self::DEFAULT_MAX_HISTORY),
        }
    }

    /// Create a router mounted at the page the given path resolves to.
    pub fn at_path(path: &str) -> RouterResult<Self> {
        let page = resolve(path).ok_or_else(|| RouterError::RouteNotFound(path.to_string()))?;
        Ok(Self::new(page))
    }

    /// Navigate to the page a path resolves to.
    pub fn navigate(&mut self, path: &str) -> RouterResult<Page> {
        let page = resolve(path).ok_or_else(|| RouterError::RouteNotFound(path.to_string()))?;
        self.navigate_to(page);
        Ok(page)
    }

    /// Navigate directly to a known page.
    pub fn navigate_to(&mut self, page: Page) {
        tracing::debug!(from = %self.state.current, to = %page, "navigate");
        self.state.navigate_to(page);
    }

    /// Go back to the previous page in history.
    pub fn go_back(&mut self) -> bool {
        let moved = self.state.go_back();
        if moved {
            tracing::debug!(to = %self.state.current, "navigate back");
        }
        moved
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.state.history.is_empty()
    }

    /// Get the currently mounted page
    pub fn current(&self) -> Page {
        self.state.current
    }

    /// Get the navigation history (most recent first)
    pub fn history(&self) -> &[Page] {
        &self.state.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}
