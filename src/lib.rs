#![forbid(unsafe_code)]

pub mod app;
pub mod breadcrumbs;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod formats;
pub mod logging;
pub mod navigation;
pub mod progress;
