//! Section renderers shared by the pages.

mod card;
mod detail;
mod pagination;
mod search_info;
mod states;

pub use card::*;
pub use detail::*;
pub use pagination::*;
pub use search_info::*;
pub use states::*;
