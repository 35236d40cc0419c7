pub mod config_controller;
pub mod itinerary_controller;

pub use config_controller::ConfigController;
pub use itinerary_controller::ItineraryController;
