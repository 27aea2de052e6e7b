// PortalNav - core/mod.rs
//
// Core navigation logic layer.
// Dependencies: standard library, serde, tracing.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod collapse;
pub mod menu;
pub mod model;
pub mod tabs;
