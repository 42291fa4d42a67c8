//! Command handlers

pub mod config;
pub mod list;
pub mod quote;
