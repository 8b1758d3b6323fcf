//! Theme system for constraint-tui
//!
//! A theme is a fixed record of semantic color roles and decorative motif
//! flags, applied uniformly across all sections. The two built-in themes are
//! mutually exclusive alternatives; exactly one is wired into the root
//! container per build (see [`Theme::active`]).

pub mod color;
pub mod models;

pub use models::{Theme, ThemeId};
