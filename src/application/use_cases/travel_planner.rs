use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::application::ItineraryChain;
use crate::domain::{ChatMessage, DomainError, Interests, PlannerError, PlannerStage};

/// Stateful planning session for a single form submission.
///
/// Collects the city and interests, keeps an append-only message history and
/// remembers the last generated itinerary. A fresh planner is created per
/// request; only the [`ItineraryChain`] is shared.
pub struct TravelPlanner {
    session_id: String,
    chain: Arc<ItineraryChain>,
    city: String,
    interests: Interests,
    messages: Vec<ChatMessage>,
    itinerary: String,
}

impl TravelPlanner {
    pub fn new(chain: Arc<ItineraryChain>) -> Self {
        let session_id = Uuid::new_v4().to_string();
        info!(session = %session_id, "TravelPlanner instance initialized");
        Self {
            session_id,
            chain,
            city: String::new(),
            interests: Interests::default(),
            messages: Vec::new(),
            itinerary: String::new(),
        }
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.trim().to_string();
        self.messages.push(ChatMessage::human(city));
        info!(session = %self.session_id, "City set successfully");
    }

    pub fn set_interests(&mut self, raw: &str) {
        self.interests = Interests::parse(raw);
        self.messages
            .push(ChatMessage::human(self.interests.to_string()));
        info!(
            session = %self.session_id,
            "Interests set successfully ({} items)",
            self.interests.len()
        );
    }

    /// Request an itinerary for the current city and interests.
    ///
    /// Fails with a validation error, without contacting the provider, unless
    /// the planner is [`PlannerStage::Ready`]. Provider failures are returned
    /// as-is inside the [`PlannerError`] envelope and leave the history
    /// untouched.
    pub async fn generate_itinerary(&mut self) -> Result<String, PlannerError> {
        let stage = self.stage();
        if !stage.is_ready() {
            let cause = DomainError::invalid_input(format!(
                "city and interests must both be set before generating (stage: {:?})",
                stage
            ));
            error!(session = %self.session_id, "Error generating itinerary: {}", cause);
            return Err(PlannerError::new("failed to generate itinerary", cause));
        }

        info!(
            session = %self.session_id,
            "Generating itinerary for {} with interests: {}",
            self.city,
            self.interests
        );

        let result = self.chain.generate(&self.city, &self.interests).await;
        match result {
            Ok(itinerary) => {
                self.itinerary = itinerary;
                self.messages
                    .push(ChatMessage::assistant(self.itinerary.clone()));
                info!(session = %self.session_id, "Itinerary generated successfully");
                Ok(self.itinerary.clone())
            }
            Err(e) => {
                error!(session = %self.session_id, "Error generating itinerary: {}", e);
                Err(PlannerError::new("failed to generate itinerary", e))
            }
        }
    }

    pub fn stage(&self) -> PlannerStage {
        PlannerStage::from_parts(!self.city.is_empty(), !self.interests.is_empty())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn interests(&self) -> &Interests {
        &self.interests
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn itinerary(&self) -> &str {
        &self.itinerary
    }
}
