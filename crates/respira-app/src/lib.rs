pub mod advice;
pub mod cli;
pub mod config;
pub mod server;
pub mod state;

pub use cli::*;
pub use config::*;
pub use server::*;
pub use state::*;
