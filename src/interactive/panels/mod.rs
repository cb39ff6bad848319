pub mod dashboard;
pub mod sidebar;
pub mod table;
