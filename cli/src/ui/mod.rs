//! Terminal UI for the portfolio site
//!
//! Pages are stateless iocraft components; the shell swaps them based on
//! the route table and drives the entrance animation.

pub mod animation;
pub mod app;
pub mod components;
pub mod pages;
pub mod text;
pub mod theme;
