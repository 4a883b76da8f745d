pub mod config;
pub mod error;
pub mod types;

pub use config::ProgressionConfig;
pub use error::{KeikoError, Result};
pub use types::{Grade, MasteryLevel, ResolutionKind, Side};
