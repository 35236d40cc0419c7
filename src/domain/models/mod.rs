mod chat_message;
mod interests;
mod itinerary_prompt;
mod planner_stage;
mod provider;

pub use chat_message::*;
pub use interests::*;
pub use itinerary_prompt::*;
pub use planner_stage::*;
pub use provider::*;
