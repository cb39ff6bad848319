pub mod routes;
pub mod sidebar;

pub use routes::{Location, Route};
pub use sidebar::{links_for, FooterAction, NavLink, Sidebar};
