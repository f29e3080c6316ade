pub mod error;
pub mod event;
pub mod model;
pub mod scoring;
pub mod standings;
pub mod storage;
pub mod view;

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
