//! Full pages.

mod detail;
mod home;
mod list;

pub use detail::*;
pub use home::*;
pub use list::*;
