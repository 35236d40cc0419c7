use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ChatClient, ItineraryChain, TravelPlanner};
use crate::connector::adapter::{GroqClient, MockChatClient, OllamaClient};
use crate::domain::BackendConfig;

pub struct ContainerConfig {
    pub backend: BackendConfig,
    /// Serve canned itineraries instead of calling the configured provider.
    pub mock_llm: bool,
}

/// Composition root: binds the chat backend once and hands out planners.
pub struct Container {
    backend: BackendConfig,
    chain: Arc<ItineraryChain>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            match &config.backend {
                BackendConfig::Local { model, base_url } => {
                    info!("Using Ollama model {} at {}", model, base_url);
                    Arc::new(OllamaClient::new(model.clone(), base_url.clone()))
                }
                BackendConfig::Cloud {
                    model,
                    base_url,
                    api_key,
                } => {
                    info!("Using Groq model {} at {}", model, base_url);
                    if api_key.is_none() {
                        tracing::warn!(
                            "GROQ_API_KEY is not set; itinerary requests will fail until it is"
                        );
                    }
                    Arc::new(GroqClient::new(api_key.clone(), model.clone(), base_url.clone()))
                }
            }
        };

        Self::with_chat_client(config.backend, client)
    }

    /// Build a container around an already constructed client.
    pub fn with_chat_client(backend: BackendConfig, client: Arc<dyn ChatClient>) -> Self {
        Self {
            backend,
            chain: Arc::new(ItineraryChain::new(client)),
        }
    }

    /// A fresh planning session sharing this container's chain.
    pub fn planner(&self) -> TravelPlanner {
        TravelPlanner::new(self.chain.clone())
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// Name of the model actually answering requests (`mock-chat` in mock mode).
    pub fn model_name(&self) -> &str {
        self.chain.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProviderKind, OLLAMA_BASE_URL, OLLAMA_MODEL};

    #[test]
    fn test_mock_flag_overrides_backend() {
        let container = Container::new(ContainerConfig {
            backend: BackendConfig::default(),
            mock_llm: true,
        });
        assert_eq!(container.model_name(), "mock-chat");
        assert_eq!(container.backend().kind(), ProviderKind::Cloud);
    }

    #[test]
    fn test_local_backend_binds_ollama_model() {
        let container = Container::new(ContainerConfig {
            backend: BackendConfig::local(OLLAMA_MODEL, OLLAMA_BASE_URL),
            mock_llm: false,
        });
        assert_eq!(container.model_name(), OLLAMA_MODEL);
    }

    #[test]
    fn test_planners_are_independent() {
        let container = Container::new(ContainerConfig {
            backend: BackendConfig::default(),
            mock_llm: true,
        });
        let mut first = container.planner();
        first.set_city("Paris");
        let second = container.planner();

        assert!(second.messages().is_empty());
        assert_ne!(first.session_id(), second.session_id());
    }
}
