pub mod validation;

pub use validation::{validate_interaction, MAX_TEXT_LEN};
