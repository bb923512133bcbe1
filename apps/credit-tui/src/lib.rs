pub mod app;
pub mod hex;
pub mod ui;
