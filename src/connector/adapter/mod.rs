mod groq_client;
mod mock_chat_client;
mod ollama_client;

pub use groq_client::*;
pub use mock_chat_client::*;
pub use ollama_client::*;
