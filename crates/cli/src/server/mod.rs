pub mod web;

pub use web::{create_app, serve, start_web_server};
