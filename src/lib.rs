pub mod calculator;
pub mod channel;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod views;
pub mod youtube;
