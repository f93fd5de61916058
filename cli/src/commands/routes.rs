//! Route table listing command

use anyhow::Result;
use folio_core::routes;
use tracing::info;

/// Print the route table.
pub async fn routes_command(json: bool) -> Result<()> {
    info!("Listing the route table");

    let table = routes();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("Route table\n");
    for route in table {
        println!("  {:<12} {}", route.path, route.label);
    }
    println!("\nOpen a page with `folio render <path>` or browse interactively with `folio`.");

    Ok(())
}
