use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::{ChatMessage, DomainError};

const MOCK_ITINERARY: &str = "\
- **Morning:** Coffee and a walk through the old town.
- **Late morning:** Visit the main sight that matches your interests.
- **Lunch:** A local specialty at a neighbourhood restaurant.
- **Afternoon:** Explore a market or museum nearby.
- **Evening:** Sunset viewpoint, then dinner.";

#[derive(Debug, Default)]
struct Recorded {
    calls: usize,
    last_prompt: Option<Vec<ChatMessage>>,
    last_temperature: Option<f32>,
}

/// Offline [`ChatClient`] returning a canned itinerary.
///
/// Records every request so callers can inspect what would have been sent.
pub struct MockChatClient {
    response: Result<String, String>,
    recorded: Mutex<Recorded>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_response(MOCK_ITINERARY)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            recorded: Mutex::new(Recorded::default()),
        }
    }

    /// A client whose every call fails with a provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            recorded: Mutex::new(Recorded::default()),
        }
    }

    pub fn calls(&self) -> usize {
        self.recorded.lock().map(|r| r.calls).unwrap_or_default()
    }

    pub fn last_prompt(&self) -> Option<Vec<ChatMessage>> {
        self.recorded
            .lock()
            .ok()
            .and_then(|r| r.last_prompt.clone())
    }

    pub fn last_temperature(&self) -> Option<f32> {
        self.recorded.lock().ok().and_then(|r| r.last_temperature)
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, DomainError> {
        {
            let mut recorded = self
                .recorded
                .lock()
                .map_err(|_| DomainError::internal("mock chat client lock poisoned"))?;
            recorded.calls += 1;
            recorded.last_prompt = Some(messages.to_vec());
            recorded.last_temperature = Some(temperature);
        }

        self.response.clone().map_err(DomainError::provider)
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
