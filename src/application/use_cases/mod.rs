mod itinerary_chain;
mod travel_planner;

pub use itinerary_chain::*;
pub use travel_planner::*;
