// PortalNav - app/mod.rs
//
// Application layer: state management, session store, logout lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod logout;
pub mod session;
pub mod state;
