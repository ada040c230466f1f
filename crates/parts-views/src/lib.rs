//! Page rendering for the excavator parts catalog.
//!
//! This crate provides:
//! - `Shell` - Document wrapper with site header and footer
//! - `sections` - Product cards, pagination, detail and state renderers
//! - `pages` - Home, list and detail pages; `ListPage` owns list navigation
//! - `Debouncer` - Coalesces rapid search input
//!
//! Every renderer returns an HTML `String` and escapes interpolated text.

mod config;
mod debounce;
mod escape;
mod links;
pub mod pages;
pub mod sections;
mod shell;

pub use config::*;
pub use debounce::*;
pub use escape::*;
pub use links::*;
pub use shell::*;
