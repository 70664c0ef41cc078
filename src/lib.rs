//! Typeset tabletop-RPG lifepath tables as LaTeX.
//!
//! The input is a comma-separated table whose first row names the columns.
//! Rows are ordered by `id`, rows not marked `use = TRUE` are dropped, and the
//! rest are rendered one minipage each under a heading for every run of
//! adjacent rows sharing a `setting`.

pub mod document;
pub mod error;
pub mod parse;
pub mod render;

pub use document::{assemble, build_document};
pub use error::LifepathError;
pub use parse::Lifepath;
