//! glox_core: Core source-position types for the glox toolchain.
//!
//! Provides the byte spans attached to tokens and the line map used to turn
//! line numbers back into source text for diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, TextPos, TextSpan};
