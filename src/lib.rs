pub mod config;
pub mod day;
pub mod debate;
pub mod document;
pub mod error;
pub mod logging;
pub mod pages;
pub mod text;
pub mod types;

pub use day::HansardDay;
pub use document::{Document, Node};
pub use error::{HansardError, Result};
