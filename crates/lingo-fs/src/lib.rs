//! Filesystem primitives for Lingo
//!
//! Provides normalized cross-platform paths, atomic file writes, and the
//! placeholder-based file-filter search used to locate translation files.

pub mod error;
pub mod filter;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use filter::{LANG_PLACEHOLDER, normalize_filter, search_filter, substitute_lang};
pub use path::NormalizedPath;
