//! constraint-tui
//!
//! The Constraint Method landing page, rendered in the terminal. The page is
//! a pure composition of five static sections; the theme (brutalist or
//! blueprint) is fixed per build output by cargo feature. Everything else in
//! this crate is viewer chrome: scrolling, an optional help panel and an
//! optional log panel.

#[cfg(all(feature = "blueprint", feature = "brutalist"))]
compile_error!(
    "the `blueprint` and `brutalist` features are mutually exclusive; \
     build the brutalist variant with `--no-default-features --features brutalist`"
);

pub mod app;
pub mod config;
pub mod content;
pub mod inputs;
pub mod logger;
pub mod sections;
pub mod theme;
pub mod tui;
pub mod ui;
