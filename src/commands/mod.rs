//! Command implementations over the library
//!
//! - `log`: porcelain history listing (medium and oneline formats)
//! - `cat_file`: plumbing object pretty-printer
//!
//! Both print through the writer injected into the repository facade,
//! so tests can capture output without touching stdout.

pub mod cat_file;
pub mod log;
