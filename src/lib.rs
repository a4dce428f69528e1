pub mod action;
pub mod browser;
pub mod config;
pub mod menu;
pub mod messages;
pub mod session;
pub mod toolkit;
