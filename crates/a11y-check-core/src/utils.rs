//! Utility functions for check implementations.

pub mod contrast;
pub mod text;

// Re-export commonly used utilities for check implementations
#[doc(inline)]
pub use contrast::{contrast_ratio, minimum_contrast, relative_luminance};
#[doc(inline)]
pub use text::{char_len, char_slice, find_char_index};
