//! Page and animation constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod carousel;
mod hero;
mod platforms;
mod scroll;
mod window;

// Re-export all constants at the module level for backward compatibility
pub use carousel::*;
pub use hero::*;
pub use platforms::*;
pub use scroll::*;
pub use window::*;
