//! Persisted planner settings, data paths and file I/O

mod error;
mod io;
mod paths;
mod settings;

pub use error::SettingsError;
pub use io::atomic_write;
pub use paths::{Paths, HOME_ENV};
pub use settings::Settings;
