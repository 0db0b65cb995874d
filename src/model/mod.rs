pub mod color;
pub mod config;
pub mod task;

pub use color::*;
pub use config::*;
pub use task::*;
