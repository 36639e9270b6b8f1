pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Cli, Commands};
pub use client::{Action, FessClient, ServerVersion};
pub use error::{AppError, ClientError};
pub use models::{OutputFormat, Settings};
