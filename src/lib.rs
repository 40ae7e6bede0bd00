// The binary entry point is main.rs; the library carries the quiz engine,
// dataset loading and widgets so integration tests and benchmarks can reach them.

pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod logging;
pub mod session;
pub mod ui;
