//! Interactive browser command

use crate::ui::animation::UiAnimationConfig;
use crate::ui::app::run_browser;
use anyhow::{anyhow, Result};
use tracing::debug;

/// Open the interactive browser at the given path.
///
/// Starting at a path outside the route table is an error; inside the UI
/// the header only ever offers known paths.
pub async fn browse_command(path: &str, animate: bool) -> Result<()> {
    let page = folio_core::resolve(path).ok_or_else(|| {
        let known: Vec<&str> = folio_core::routes().iter().map(|route| route.path).collect();
        anyhow!(
            "no route matches path '{}' (known routes: {})",
            path,
            known.join(", ")
        )
    })?;

    debug!(page = %page, "opening browser");

    let mut anim = UiAnimationConfig::from_env();
    if !animate {
        anim.enabled = false;
    }

    run_browser(page, anim).await
}
