pub mod chat;
pub mod cli;
pub mod core;
pub mod events;
pub mod jobs;
pub mod web;

pub use web::{build_rocket, start_web_server};
