use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ConfigController, ItineraryController};

pub struct Router<'a> {
    itinerary_controller: ItineraryController<'a>,
    config_controller: ConfigController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            itinerary_controller: ItineraryController::new(container),
            config_controller: ConfigController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Plan { city, interests } => {
                self.itinerary_controller.plan(city, interests).await
            }
            Commands::Config => self.config_controller.show().await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
