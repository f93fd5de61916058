//! One-shot page rendering command

use crate::ui::app::{Shell, ShellView};
use anyhow::Result;
use iocraft::prelude::*;
use tracing::debug;

/// Render the page at the given path to stdout and exit.
///
/// Paths outside the route table mount the fallback page.
pub async fn render_command(path: &str) -> Result<()> {
    let view = match folio_core::resolve(path) {
        Some(page) => ShellView::Page(page),
        None => ShellView::NotFound(path.to_string()),
    };

    debug!(path, "rendering page");

    element! { Shell(view: view, reveal: 1.0) }.print();

    Ok(())
}
