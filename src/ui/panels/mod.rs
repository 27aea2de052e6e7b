// PortalNav - ui/panels/mod.rs

pub mod logs;
pub mod menu;
pub mod page;
