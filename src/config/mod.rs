//! Configuration for gitship.
//!
//! This module defines the Config struct read from `.gitship.yaml` (or the
//! file named by `GITSHIP_CONFIG`). Unknown fields are ignored and every
//! field has a default, so a missing file means "all defaults".

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
