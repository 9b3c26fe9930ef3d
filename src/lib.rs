#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const MATWEAVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod input;
pub mod normalize;
pub mod style;
pub mod weave;

// Re-exports for convenience
pub use input::{InputEvent, InputManager};
pub use normalize::{InputError, Name, normalize_name, parse_digits};
pub use weave::chk;
