pub mod capture;
pub mod chapters;
pub mod error;
pub mod filename;
pub mod handoff;
pub mod note;
pub mod settings;

pub use error::{Error, Result};
