pub mod ids;
pub mod interaction;

pub use ids::InteractionId;
pub use interaction::{CustomerInteraction, CustomerInteractionNew, InteractionType};
