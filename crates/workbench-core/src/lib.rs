pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod page;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::InteractionFilter;
pub use page::{Page, PageRequest};
pub use rules::*;
