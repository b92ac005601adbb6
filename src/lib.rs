pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod items;
pub mod widgets;
