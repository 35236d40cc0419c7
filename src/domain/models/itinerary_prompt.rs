use super::{ChatMessage, Interests};

/// Sampling temperature used for every itinerary request.
pub const ITINERARY_TEMPERATURE: f32 = 0.2;

const HUMAN_INSTRUCTION: &str = "Create an itinerary for my day trip";

/// The system + human message pair sent to the provider for one itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryPrompt {
    system: String,
    human: String,
}

impl ItineraryPrompt {
    pub fn new(city: &str, interests: &Interests) -> Self {
        let system = format!(
            "You are a helpful travel assistant. Create a day trip itinerary for {} \
             based on user's interests: {}. Provide a brief, bulleted itinerary.",
            city,
            interests.joined()
        );
        Self {
            system,
            human: HUMAN_INSTRUCTION.to_string(),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn human(&self) -> &str {
        &self.human
    }

    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.clone()),
            ChatMessage::human(self.human.clone()),
        ]
    }
}
