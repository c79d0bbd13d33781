//! Portal shell behaviors: header visibility and the navigation table.

pub mod header;
pub mod nav;

pub use header::HeaderVisibility;
pub use nav::{NavItem, NAV_ITEMS};
