pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ItineraryChain, TravelPlanner};

pub use cli::Commands;

pub use connector::{
    backend_from_env, resolve_backend, Container, ContainerConfig, GroqClient, MockChatClient,
    OllamaClient, Router,
};

pub use domain::{
    BackendConfig, ChatMessage, DomainError, Interests, ItineraryPrompt, PlannerError,
    PlannerStage, ProviderKind, Role,
};
