//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: writes the [`NewsBundle`](crate::models::NewsBundle) digest
//!
//! # Output Structure
//!
//! ```text
//! data/
//! └── daily_news.json   # overwritten on every run
//! ```

pub mod json;
