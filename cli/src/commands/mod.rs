//! CLI command implementations

pub mod browse;
pub mod render;
pub mod routes;

pub use browse::browse_command;
pub use render::render_command;
pub use routes::routes_command;
