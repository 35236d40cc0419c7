use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{DomainError, Interests, ItineraryPrompt, ITINERARY_TEMPERATURE};

/// Renders the itinerary prompt and sends it to the configured chat backend.
///
/// The backend is bound once at construction; every call to
/// [`ItineraryChain::generate`] issues exactly one request and returns the
/// model's text unchanged.
pub struct ItineraryChain {
    client: Arc<dyn ChatClient>,
    temperature: f32,
}

impl ItineraryChain {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            temperature: ITINERARY_TEMPERATURE,
        }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    pub async fn generate(&self, city: &str, interests: &Interests) -> Result<String, DomainError> {
        let prompt = ItineraryPrompt::new(city, interests);
        debug!("Itinerary system prompt: {}", prompt.system());

        let start_time = Instant::now();
        let text = self
            .client
            .complete(&prompt.to_messages(), self.temperature)
            .await?;

        info!(
            "{} answered in {:.2}s ({} chars)",
            self.client.model_name(),
            start_time.elapsed().as_secs_f64(),
            text.len()
        );

        Ok(text)
    }
}
