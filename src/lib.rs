pub mod ai;
pub mod config;
pub mod content;
pub mod types;
pub mod ui;
pub mod views;
