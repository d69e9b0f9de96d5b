pub mod columns;
pub mod error;
pub mod parser;

pub use error::{IngestError, Result};
pub use parser::{parse_interactions, parse_interactions_str, ParsedBatch};
