pub mod config;
pub mod env_file;
pub mod error;
pub mod pipeline;
pub mod template;

pub use config::Config;
pub use error::InjectError;
