pub mod app;
pub mod components;
pub mod design_system;
pub mod sections;
pub mod ui_components;
