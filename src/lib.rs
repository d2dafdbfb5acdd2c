// Library exports for testing
pub mod config;
pub mod constants;
pub mod generator;
pub mod manifest;

pub use config::IconConfig;
pub use generator::{generate_icons, GenerationOutcome, IconFile, IconGenerator};
